//! Candidate-set finders
//!
//! A finder looks at a score list sorted descending and answers how long a
//! prefix to keep.

/// An element carrying a ranking score
pub trait Scored {
    fn score(&self) -> f64;
}

impl Scored for f64 {
    #[inline]
    fn score(&self) -> f64 {
        *self
    }
}

impl<T> Scored for (T, f64) {
    #[inline]
    fn score(&self) -> f64 {
        self.1
    }
}

impl<S: Scored + ?Sized> Scored for &S {
    #[inline]
    fn score(&self) -> f64 {
        (**self).score()
    }
}

/// Decides where a descending-sorted score list is cut
pub trait CandidateSetFinder: Send + Sync {
    /// Cut index `k`; elements `[0, k)` are retained.
    ///
    /// `elements` must be sorted by score, descending.
    fn prune_index<T: Scored>(&self, elements: &[T]) -> usize;

    /// Finder name for logs
    fn name(&self) -> &'static str;
}
