//! Window partitioning math

use std::ops::Range;

/// Number of windows needed to show `len` items `size` at a time
pub fn window_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}

/// Item range covered by window `index`; the last window may be short
pub fn window_range(index: usize, len: usize, size: usize) -> Range<usize> {
    let size = size.max(1);
    let start = index.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_is_ceiling() {
        assert_eq!(window_count(0, 1), 0);
        assert_eq!(window_count(5, 1), 5);
        assert_eq!(window_count(5, 2), 3);
        assert_eq!(window_count(6, 3), 2);
        assert_eq!(window_count(7, 3), 3);
        assert_eq!(window_count(2, 10), 1);
    }

    #[test]
    fn test_zero_size_is_treated_as_one() {
        assert_eq!(window_count(4, 0), 4);
        assert_eq!(window_range(2, 4, 0), 2..3);
    }

    #[test]
    fn test_window_count_property() {
        for len in 0..40usize {
            for size in 1..8usize {
                let count = window_count(len, size);
                assert_eq!(count, (len + size - 1) / size);
                let covered: usize = (0..count).map(|i| window_range(i, len, size).len()).sum();
                assert_eq!(covered, len, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_last_window_is_partial() {
        assert_eq!(window_range(0, 7, 3), 0..3);
        assert_eq!(window_range(1, 7, 3), 3..6);
        assert_eq!(window_range(2, 7, 3), 6..7);
    }

    #[test]
    fn test_out_of_range_window_is_empty() {
        assert!(window_range(5, 7, 3).is_empty());
    }
}
