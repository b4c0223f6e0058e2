pub mod sort;
pub mod heap;
pub mod harness;
pub mod distribution;
mod base_case;
mod config;
mod memory;

pub use sort::{sort_binary_heap, sort_ternary_heap, sort_ternary_heap_with, Cleanup, TernaryBuild};
pub use base_case::{insertion_sort, is_partly_sorted};
pub use heap::{heapify_binary, heapify_ternary, is_max_heap, sift_down};
pub use harness::{run_trial, run_trials, Algorithm, Measurement, Results};
pub use distribution::InputKind;
pub use memory::resident_set_size;
pub use config::*;
