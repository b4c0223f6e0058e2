use log::warn;
use crate::config::{MIB, PAGE_SIZE};

/// Resident set size of the current process in bytes, or `None` if the
/// platform does not expose it.
#[cfg(target_os = "linux")]
pub fn resident_set_size() -> Option<usize> {
    let statm = match std::fs::read_to_string("/proc/self/statm") {
        Ok(s) => s,
        Err(e) => {
            warn!("Could not read /proc/self/statm: {}", e);
            return None;
        }
    };
    parse_statm(&statm)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_set_size() -> Option<usize> {
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
// statm: size resident shared text lib data dt (all in pages)
fn parse_statm(statm: &str) -> Option<usize> {
    let pages = statm.split_whitespace().nth(1)?.parse::<usize>().ok()?;
    Some(pages * PAGE_SIZE)
}

pub fn to_mib(bytes: usize) -> f64 {
    bytes as f64 / MIB
}
