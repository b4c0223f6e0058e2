use std::env;
use std::process;
use log::LevelFilter;
use log::info;

use improved_heapsort::{run_trials, InputKind, TernaryBuild, DEFAULT_SEED, DEFAULT_SIZE, DEFAULT_TRIALS};

const USAGE: &str = "Usage: improved_heapsort <size?> <trials?> <seed?> <distribution?> <build?>
  distribution: 1 uniform, 2 exponential, 3 almost sorted, 4 root dup,
                5 two dup, 6 range, 7 sorted, 8 reversed
  build:        legacy | last-parent";

fn parse_or_exit<T: std::str::FromStr>(name: &str, arg: &str) -> T {
    match arg.parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {}: '{}'\n{}", name, arg, USAGE);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let size = match args.next() {
        Some(arg) => parse_or_exit::<usize>("size", &arg),
        None => {
            eprintln!("No size specified. Using {}", DEFAULT_SIZE);
            DEFAULT_SIZE
        }
    };

    let trials = match args.next() {
        Some(arg) => parse_or_exit::<usize>("trials", &arg),
        None => {
            eprintln!("No trial count specified. Using {}", DEFAULT_TRIALS);
            DEFAULT_TRIALS
        }
    };
    if trials == 0 {
        eprintln!("Trial count must be positive\n{}", USAGE);
        process::exit(1);
    }

    let seed = match args.next() {
        Some(arg) => parse_or_exit::<u64>("seed", &arg),
        None => {
            eprintln!("No seed specified. Using {}", DEFAULT_SEED);
            DEFAULT_SEED
        }
    };

    let kind = match args.next() {
        Some(arg) => match InputKind::from_index(parse_or_exit::<usize>("distribution", &arg)) {
            Some(kind) => kind,
            None => {
                eprintln!("Invalid distribution: {}\n{}", arg, USAGE);
                process::exit(1);
            }
        },
        None => InputKind::Uniform,
    };

    let build = match args.next().as_deref() {
        None | Some("legacy") => TernaryBuild::Legacy,
        Some("last-parent") => TernaryBuild::LastParent,
        Some(other) => {
            eprintln!("Invalid build: {}\n{}", other, USAGE);
            process::exit(1);
        }
    };

    info!("size={}, trials={}, seed={}, distribution={}, build={:?}", size, trials, seed, kind, build);
    let results = run_trials(kind, size, trials, seed, build);

    println!("Heap sort vs improved heap sort: {} x {} {} elements (build: {:?})", trials, size, kind, build);
    print!("{}", results);
    println!("Improved heap sort fell back to insertion sort in {} of {} trials", results.fallback_count(), results.len());

    if results.failures() > 0 {
        process::exit(2);
    }
}
