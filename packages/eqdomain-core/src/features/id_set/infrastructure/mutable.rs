//! Mutable hash-backed id set
//!
//! Used wherever sets grow incrementally: adjacency lists of sparse graphs,
//! component member sets, Bron–Kerbosch candidate sets. There is no ordering
//! invariant; call [`HashIdSet::to_immutable`] to freeze into sorted form.

use crate::features::id_set::domain::IdSet;
use crate::features::id_set::infrastructure::immutable::ImmutableIdSet;
use rustc_hash::FxHashSet;

/// Mutable set of unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashIdSet {
    elements: FxHashSet<u32>,
}

impl HashIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Add an element. Returns true if it was not present.
    #[inline]
    pub fn add(&mut self, id: u32) -> bool {
        self.elements.insert(id)
    }

    pub fn add_all(&mut self, ids: impl IntoIterator<Item = u32>) {
        self.elements.extend(ids);
    }

    /// Remove an element. Returns true if it was present.
    #[inline]
    pub fn remove(&mut self, id: u32) -> bool {
        self.elements.remove(&id)
    }

    pub fn remove_all(&mut self, ids: impl IntoIterator<Item = u32>) {
        for id in ids {
            self.elements.remove(&id);
        }
    }

    /// Keep only elements that are also in `other`
    pub fn retain_all(&mut self, other: &dyn IdSet) {
        self.elements.retain(|id| other.contains(*id));
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Any element (used for pivot selection)
    pub fn any(&self) -> Option<u32> {
        self.elements.iter().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.elements.iter().copied()
    }

    /// Freeze into a sorted immutable set
    pub fn to_immutable(&self) -> ImmutableIdSet {
        let mut elements: Vec<u32> = self.elements.iter().copied().collect();
        elements.sort_unstable();
        ImmutableIdSet::from_sorted_unchecked(elements)
    }

    /// Consume into a sorted immutable set
    pub fn into_immutable(self) -> ImmutableIdSet {
        let mut elements: Vec<u32> = self.elements.into_iter().collect();
        elements.sort_unstable();
        ImmutableIdSet::from_sorted_unchecked(elements)
    }
}

impl IdSet for HashIdSet {
    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn contains(&self, id: u32) -> bool {
        self.elements.contains(&id)
    }

    fn ids(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        Box::new(self.elements.iter().copied())
    }

    fn as_dyn(&self) -> &dyn IdSet {
        self
    }
}

impl FromIterator<u32> for HashIdSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for HashIdSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl From<&ImmutableIdSet> for HashIdSet {
    fn from(set: &ImmutableIdSet) -> Self {
        set.iter().collect()
    }
}
