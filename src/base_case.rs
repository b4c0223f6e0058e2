/// Sorts the inclusive range `arr[left..=right]` by shifting larger
/// elements one slot to the right and dropping each key into the gap.
///
/// `left >= right` is a no-op. Stable.
///
/// # Panics
/// If `left < right` and `right >= arr.len()`.
pub fn insertion_sort<T: Ord + Copy>(arr: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    assert!(right < arr.len(), "range end {} out of bounds for length {}", right, arr.len());
    for i in left + 1..=right {
        let key = arr[i];
        let mut j = i;
        while j > left && key < arr[j - 1] {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}

/// Returns true if `arr[..n]` has no adjacent inversion.
pub fn is_partly_sorted<T: Ord>(arr: &[T], n: usize) -> bool {
    arr[..n].windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    #[test]
    fn test_full_range() {
        let mut arr = [5, 2, 4, 6, 1, 3];
        insertion_sort(&mut arr, 0, 5);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sub_range_leaves_outside_untouched() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..100 {
            let len = rng.gen_range(1..64);
            let left = rng.gen_range(0..len);
            let right = rng.gen_range(left..len);
            let original: Vec<u64> = (0..len).map(|_| rng.gen_range(0..20)).collect();
            let mut arr = original.clone();
            insertion_sort(&mut arr, left, right);

            assert_eq!(arr[..left], original[..left]);
            assert_eq!(arr[right + 1..], original[right + 1..]);
            let mut expected = original[left..=right].to_vec();
            expected.sort();
            assert_eq!(arr[left..=right], expected[..]);
        }
    }

    #[test]
    fn test_stable() {
        use std::cmp::Ordering;

        // (key, input position); ordering only looks at the key
        #[derive(Clone, Copy, Debug)]
        struct Keyed(u32, usize);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> Ordering { self.0.cmp(&other.0) }
        }

        let mut arr = [Keyed(2, 0), Keyed(1, 1), Keyed(2, 2), Keyed(1, 3)];
        insertion_sort(&mut arr, 0, 3);
        let order: Vec<(u32, usize)> = arr.iter().map(|k| (k.0, k.1)).collect();
        assert_eq!(order, [(1, 1), (1, 3), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_inverted_range_is_noop() {
        let mut arr = [3, 2, 1];
        insertion_sort(&mut arr, 2, 0);
        assert_eq!(arr, [3, 2, 1]);
        insertion_sort(&mut arr, 1, 1);
        assert_eq!(arr, [3, 2, 1]);
        // out of bounds but empty: still a no-op
        insertion_sort(&mut arr, 10, 5);
        assert_eq!(arr, [3, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn test_range_out_of_bounds() {
        let mut arr = [3, 2, 1];
        insertion_sort(&mut arr, 0, 3);
    }

    #[test]
    fn test_is_partly_sorted() {
        assert!(is_partly_sorted::<u64>(&[], 0));
        assert!(is_partly_sorted(&[7], 1));
        assert!(is_partly_sorted(&[1, 2, 3], 3));
        assert!(is_partly_sorted(&[1, 1, 2, 2], 4));
        assert!(!is_partly_sorted(&[1, 3, 2], 3));
        assert!(!is_partly_sorted(&[2, 1], 2));
        // only the prefix counts
        assert!(is_partly_sorted(&[1, 2, 0], 2));
    }
}
