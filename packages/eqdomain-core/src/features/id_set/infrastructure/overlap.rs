//! Overlap kernels over sorted id slices
//!
//! These are the hot loops behind set intersection counting, Jaccard
//! similarity and block precision. Both inputs must be strictly ascending.
//!
//! # Performance Characteristics
//! - `sorted_overlap`: O(|A| + |B|) linear merge
//! - `sorted_overlaps`: same bound, but aborts as soon as the unscanned
//!   remainder of either side can no longer reach the threshold

use crate::shared::models::Fraction;
use std::cmp::Ordering;

/// Exact intersection cardinality of two sorted slices
pub fn sorted_overlap(a: &[u32], b: &[u32]) -> usize {
    let mut i = 0;
    let mut j = 0;
    let mut count = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }

    count
}

/// Returns `sorted_overlap(a, b) >= threshold` without always scanning both
/// slices to the end.
///
/// The bound `count + min(remaining_a, remaining_b)` is recomputed at every
/// step; once it drops below `threshold` the answer is false.
pub fn sorted_overlaps(a: &[u32], b: &[u32], threshold: usize) -> bool {
    if threshold == 0 {
        return true;
    }

    let mut i = 0;
    let mut j = 0;
    let mut count = 0;

    while i < a.len() && j < b.len() {
        let remaining = (a.len() - i).min(b.len() - j);
        if count + remaining < threshold {
            return false;
        }

        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                if count >= threshold {
                    return true;
                }
                i += 1;
                j += 1;
            }
        }
    }

    count >= threshold
}

/// Jaccard index from set sizes and their overlap: `o / (m + n - o)`.
///
/// Two empty sets have index zero.
#[inline]
pub fn jaccard(len_a: usize, len_b: usize, overlap: usize) -> Fraction {
    let union = (len_a + len_b).saturating_sub(overlap);
    Fraction::new(overlap as u64, union as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_overlap() {
        assert_eq!(sorted_overlap(&[1, 3, 5, 7], &[2, 3, 4, 7, 9]), 2);
        assert_eq!(sorted_overlap(&[], &[1, 2]), 0);
        assert_eq!(sorted_overlap(&[1, 2, 3], &[1, 2, 3]), 3);
    }

    #[test]
    fn test_sorted_overlaps_bounds() {
        let a = [1, 2, 3, 4];
        let b = [3, 4, 5, 6];
        assert!(sorted_overlaps(&a, &b, 0));
        assert!(sorted_overlaps(&a, &b, 2));
        assert!(!sorted_overlaps(&a, &b, 3));
        // Threshold larger than either side can never be met
        assert!(!sorted_overlaps(&a, &b, 5));
        assert!(!sorted_overlaps(&[], &[], 1));
        assert!(sorted_overlaps(&[], &[], 0));
    }

    #[test]
    fn test_sorted_overlaps_early_exit_on_tail() {
        // Only the last elements match; the bound must not abort too early
        assert!(sorted_overlaps(&[1, 2, 10], &[5, 6, 10], 1));
    }

    #[test]
    fn test_jaccard() {
        assert_eq!(jaccard(4, 4, 2), Fraction::new(1, 3));
        assert_eq!(jaccard(3, 3, 3), Fraction::ONE);
        assert_eq!(jaccard(0, 0, 0), Fraction::ZERO);
    }
}
