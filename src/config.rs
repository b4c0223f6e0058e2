pub const BINARY: usize = 2;
pub const TERNARY: usize = 3;

pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_TRIALS: usize = 5;
pub const DEFAULT_SIZE: usize = 1_000_000;
// inclusive upper bound for uniform inputs
pub const MAX_VALUE: u64 = 1_000_000;

pub const PAGE_SIZE: usize = 4096;
pub const MIB: f64 = (1024 * 1024) as f64;

const _: () = {
    assert!(BINARY >= 2, "a heap needs at least two children per node");
    assert!(TERNARY == BINARY + 1, "TERNARY must be BINARY + 1");
    assert!(DEFAULT_TRIALS > 0, "DEFAULT_TRIALS must be positive");
};
