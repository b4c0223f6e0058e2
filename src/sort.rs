use log::debug;
use crate::base_case::{insertion_sort, is_partly_sorted};
use crate::config::{BINARY, TERNARY};
use crate::heap::{heapify_binary, heapify_ternary, last_parent};

/// Where the ternary build phase starts sifting down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TernaryBuild {
    /// Start at `n/3 - 1`. For `n % 3 == 2` this skips the last internal
    /// node, so the heap can be invalid and the insertion-sort pass has
    /// to repair the result.
    #[default]
    Legacy,
    /// Start at the last internal node `(n-2)/3`.
    LastParent,
}

impl TernaryBuild {
    fn start(self, n: usize) -> Option<usize> {
        match self {
            TernaryBuild::Legacy => (n / TERNARY).checked_sub(1),
            TernaryBuild::LastParent => last_parent::<TERNARY>(n),
        }
    }
}

/// What the ternary sort had to do after extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cleanup {
    AlreadySorted,
    InsertionSorted,
}

/// Sorts `arr` ascending in place with a binary max-heap.
///
/// Not stable: equal elements may be reordered.
pub fn sort_binary_heap<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    for i in (0..n / BINARY).rev() {
        heapify_binary(arr, n, i);
    }

    for i in (1..n).rev() {
        arr.swap(0, i);
        heapify_binary(arr, i, 0);
    }
}

/// Sorts `arr` ascending in place with a ternary max-heap, followed by an
/// insertion-sort pass whenever extraction left an inversion behind.
///
/// Uses [`TernaryBuild::Legacy`]. Not stable.
pub fn sort_ternary_heap<T: Ord + Copy>(arr: &mut [T]) {
    sort_ternary_heap_with(arr, TernaryBuild::Legacy);
}

/// Ternary heap sort with an explicit build policy. The fallback pass is
/// O(n^2) on badly disordered output; the returned [`Cleanup`] says
/// whether it ran.
pub fn sort_ternary_heap_with<T: Ord + Copy>(arr: &mut [T], build: TernaryBuild) -> Cleanup {
    let n = arr.len();
    if n <= 1 {
        return Cleanup::AlreadySorted;
    }

    if let Some(start) = build.start(n) {
        for i in (0..=start).rev() {
            heapify_ternary(arr, n, i);
        }
    }

    for i in (1..n).rev() {
        arr.swap(0, i);
        heapify_ternary(arr, i, 0);
    }

    if is_partly_sorted(arr, n) {
        Cleanup::AlreadySorted
    } else {
        debug!("Ternary extraction left inversions (n={}, build={:?}), running insertion sort", n, build);
        insertion_sort(arr, 0, n - 1);
        Cleanup::InsertionSorted
    }
}
