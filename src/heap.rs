use crate::config::{BINARY, TERNARY};

/// Restores the max-heap property of the subtree rooted at `i`, treating
/// `arr[..n]` as a heap with branching factor `B`.
///
/// The children `B*i+1 ..= B*i+B` are visited in order and each one is
/// compared against the running largest, not the original root. Both child
/// subtrees are expected to be valid heaps already.
///
/// # Panics
/// If `n > arr.len()`.
#[inline]
pub fn sift_down<T: Ord, const B: usize>(arr: &mut [T], n: usize, mut i: usize) {
    assert!(n <= arr.len(), "heap size {} exceeds length {}", n, arr.len());
    loop {
        let mut largest = i;
        let first = B * i + 1;
        for child in first..(first + B).min(n) {
            if arr[child] > arr[largest] {
                largest = child;
            }
        }
        if largest == i {
            return;
        }
        arr.swap(i, largest);
        i = largest;
    }
}

pub fn heapify_binary<T: Ord>(arr: &mut [T], n: usize, i: usize) {
    sift_down::<T, BINARY>(arr, n, i);
}

pub fn heapify_ternary<T: Ord>(arr: &mut [T], n: usize, i: usize) {
    sift_down::<T, TERNARY>(arr, n, i);
}

/// Index of the last node with at least one child in a `B`-ary heap of size `n`.
pub fn last_parent<const B: usize>(n: usize) -> Option<usize> {
    if n < 2 {
        None
    } else {
        Some((n - 2) / B)
    }
}

pub fn is_max_heap<T: Ord, const B: usize>(arr: &[T], n: usize) -> bool {
    (1..n).all(|child| arr[(child - 1) / B] >= arr[child])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    fn build<const B: usize>(arr: &mut [u64]) {
        let n = arr.len();
        if let Some(start) = last_parent::<B>(n) {
            for i in (0..=start).rev() {
                sift_down::<u64, B>(arr, n, i);
            }
        }
    }

    #[test]
    fn test_binary_root() {
        let mut arr = [1, 9, 5, 3, 4];
        heapify_binary(&mut arr, 5, 0);
        assert_eq!(arr, [9, 4, 5, 3, 1]);
        assert!(is_max_heap::<u64, 2>(&arr, 5));
    }

    #[test]
    fn test_ternary_chained_comparison() {
        // mid beats left, right beats mid
        let mut arr = [0, 3, 5, 7];
        heapify_ternary(&mut arr, 4, 0);
        assert_eq!(arr, [7, 3, 5, 0]);

        // equal children keep the first one seen
        let mut arr = [0, 6, 6, 6];
        heapify_ternary(&mut arr, 4, 0);
        assert_eq!(arr, [6, 0, 6, 6]);
    }

    #[test]
    fn test_respects_heap_size() {
        let mut arr = [1, 2, 100];
        heapify_binary(&mut arr, 2, 0);
        assert_eq!(arr, [2, 1, 100]);
    }

    #[test]
    fn test_no_swap_on_valid_heap() {
        let mut arr = [9, 8, 7, 6, 5, 4, 3];
        heapify_ternary(&mut arr, 7, 0);
        assert_eq!(arr, [9, 8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_last_parent() {
        assert_eq!(last_parent::<2>(0), None);
        assert_eq!(last_parent::<2>(1), None);
        assert_eq!(last_parent::<2>(2), Some(0));
        assert_eq!(last_parent::<2>(7), Some(2));
        assert_eq!(last_parent::<3>(4), Some(0));
        assert_eq!(last_parent::<3>(5), Some(1));
        assert_eq!(last_parent::<3>(11), Some(3));
    }

    #[test]
    fn test_build_produces_heap() {
        let mut rng = StdRng::seed_from_u64(12345);
        for n in 0..200 {
            let mut a: Vec<u64> = (0..n).map(|_| rng.gen_range(0..50)).collect();
            let mut b = a.clone();
            build::<2>(&mut a);
            build::<3>(&mut b);
            assert!(is_max_heap::<u64, 2>(&a, a.len()), "binary heap broken for n={}", n);
            assert!(is_max_heap::<u64, 3>(&b, b.len()), "ternary heap broken for n={}", n);
        }
    }

    #[test]
    fn test_is_max_heap_detects_violation() {
        assert!(is_max_heap::<u64, 3>(&[5, 1, 2, 3, 9], 4));
        assert!(!is_max_heap::<u64, 3>(&[5, 1, 2, 3, 9], 5));
        assert!(is_max_heap::<u64, 2>(&[], 0));
    }

    #[test]
    #[should_panic]
    fn test_size_out_of_bounds() {
        let mut arr = [1, 2, 3];
        heapify_binary(&mut arr, 4, 0);
    }
}
