//! The `IdSet` abstraction
//!
//! Every stage of the discovery pipeline exchanges node, term and column
//! identifiers as sets of unique `u32`s. Two representations implement this
//! trait:
//! - [`ImmutableIdSet`](crate::features::id_set::ImmutableIdSet): sorted array
//! - [`HashIdSet`](crate::features::id_set::HashIdSet): hash-backed, mutable
//!
//! Comparison operations accept `&dyn IdSet` so representations can be mixed
//! freely. When both sides expose a sorted slice the linear-merge kernels are
//! used, otherwise the smaller side is probed against the larger.

use crate::features::id_set::infrastructure::overlap::{jaccard, sorted_overlap, sorted_overlaps};
use crate::shared::models::Fraction;

/// A set of unique integer identifiers
pub trait IdSet: Send + Sync {
    /// Number of elements
    fn len(&self) -> usize;

    /// Membership test
    fn contains(&self, id: u32) -> bool;

    /// Iterate over all elements (ascending only for sorted representations)
    fn ids(&self) -> Box<dyn Iterator<Item = u32> + '_>;

    /// Sorted backing slice, if the representation keeps one
    fn as_sorted(&self) -> Option<&[u32]> {
        None
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact intersection cardinality
    fn overlap(&self, other: &dyn IdSet) -> usize {
        if let (Some(a), Some(b)) = (self.as_sorted(), other.as_sorted()) {
            return sorted_overlap(a, b);
        }

        if self.len() <= other.len() {
            self.ids().filter(|id| other.contains(*id)).count()
        } else {
            other.ids().filter(|id| self.contains(*id)).count()
        }
    }

    /// `overlap(other) >= threshold`, aborting as soon as the threshold can
    /// no longer be reached.
    fn overlaps(&self, other: &dyn IdSet, threshold: usize) -> bool {
        if let (Some(a), Some(b)) = (self.as_sorted(), other.as_sorted()) {
            return sorted_overlaps(a, b, threshold);
        }
        if threshold == 0 {
            return true;
        }

        let (small, large): (&dyn IdSet, &dyn IdSet) = if self.len() <= other.len() {
            (self.as_dyn(), other)
        } else {
            (other, self.as_dyn())
        };

        let total = small.len();
        let mut count = 0;
        for (scanned, id) in small.ids().enumerate() {
            if count + (total - scanned) < threshold {
                return false;
            }
            if large.contains(id) {
                count += 1;
                if count >= threshold {
                    return true;
                }
            }
        }
        count >= threshold
    }

    /// Jaccard index `overlap / (|A| + |B| - overlap)` as an exact fraction
    fn ji(&self, other: &dyn IdSet) -> Fraction {
        jaccard(self.len(), other.len(), self.overlap(other))
    }

    /// Strict subset: `|A| < |B|` and every element of A is in B
    fn is_true_subset_of(&self, other: &dyn IdSet) -> bool {
        self.len() < other.len() && self.ids().all(|id| other.contains(id))
    }

    /// Same elements, regardless of representation
    fn same_set_as(&self, other: &dyn IdSet) -> bool {
        self.len() == other.len() && self.overlap(other) == self.len()
    }

    /// Every element of `other` is in `self`
    fn contains_all(&self, other: &dyn IdSet) -> bool {
        other.len() <= self.len() && other.ids().all(|id| self.contains(id))
    }

    fn is_disjoint(&self, other: &dyn IdSet) -> bool {
        !self.overlaps(other, 1)
    }

    /// Elements in ascending order
    fn to_sorted_vec(&self) -> Vec<u32> {
        match self.as_sorted() {
            Some(slice) => slice.to_vec(),
            None => {
                let mut ids: Vec<u32> = self.ids().collect();
                ids.sort_unstable();
                ids
            }
        }
    }

    /// Comma-separated ascending ids (`"1,4,9"`)
    fn to_id_string(&self) -> String {
        self.to_sorted_vec()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Smallest element
    fn min(&self) -> Option<u32> {
        match self.as_sorted() {
            Some(slice) => slice.first().copied(),
            None => self.ids().min(),
        }
    }

    /// Largest element
    fn max(&self) -> Option<u32> {
        match self.as_sorted() {
            Some(slice) => slice.last().copied(),
            None => self.ids().max(),
        }
    }

    #[doc(hidden)]
    fn as_dyn(&self) -> &dyn IdSet;
}
