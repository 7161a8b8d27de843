//! Immutable sorted-array id set
//!
//! # Invariant
//! Elements are strictly ascending. Construction from data that violates the
//! invariant fails immediately with [`DomainError::DuplicateElement`] or
//! [`DomainError::UnsortedInput`]; a partially built set is never exposed.
//! Deserialization goes through the same check.
//!
//! # Performance Characteristics
//! - Contains: O(log n) binary search
//! - Union / difference: O(n + m) merge
//! - Intersection: O(n + m) merge, or O(min(n, m)) probes against a hash set

use crate::errors::{DomainError, Result};
use crate::features::id_set::domain::IdSet;
use crate::features::id_set::infrastructure::merge::KWayMerge;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Immutable set of unique ids backed by a strictly ascending array
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ImmutableIdSet {
    elements: Vec<u32>,
}

impl ImmutableIdSet {
    /// Create an empty set
    #[inline]
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create from a single element
    #[inline]
    pub fn singleton(id: u32) -> Self {
        Self { elements: vec![id] }
    }

    /// Create from an already ascending vector, validating the invariant
    pub fn from_sorted(elements: Vec<u32>) -> Result<Self> {
        for pair in elements.windows(2) {
            match pair[0].cmp(&pair[1]) {
                Ordering::Less => {}
                Ordering::Equal => return Err(DomainError::DuplicateElement(pair[0])),
                Ordering::Greater => {
                    return Err(DomainError::UnsortedInput {
                        previous: pair[0],
                        next: pair[1],
                    })
                }
            }
        }
        Ok(Self { elements })
    }

    /// Create from values in any order; a repeated value is an error
    pub fn from_unsorted(ids: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut elements: Vec<u32> = ids.into_iter().collect();
        elements.sort_unstable();
        if let Some(pair) = elements.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DomainError::DuplicateElement(pair[0]));
        }
        Ok(Self { elements })
    }

    /// Create from values that may repeat (sorts and deduplicates)
    pub fn collect_unique(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut elements: Vec<u32> = ids.into_iter().collect();
        elements.sort_unstable();
        elements.dedup();
        Self { elements }
    }

    /// Internal constructor for merge results that are sorted by construction
    #[inline]
    pub(crate) fn from_sorted_unchecked(elements: Vec<u32>) -> Self {
        debug_assert!(elements.windows(2).all(|p| p[0] < p[1]));
        Self { elements }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u32>> {
        self.elements.iter().copied()
    }

    /// Element at a position in ascending order
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.elements.get(index).copied()
    }

    /// Position of an element in ascending order
    #[inline]
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.elements.binary_search(&id).ok()
    }

    #[inline]
    pub fn first(&self) -> Option<u32> {
        self.elements.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<u32> {
        self.elements.last().copied()
    }

    /// Union with any id set
    pub fn union(&self, other: &dyn IdSet) -> ImmutableIdSet {
        match other.as_sorted() {
            Some(b) => Self::from_sorted_unchecked(merge_union(&self.elements, b)),
            None => Self::collect_unique(self.iter().chain(other.ids())),
        }
    }

    /// Intersection with any id set
    pub fn intersect(&self, other: &dyn IdSet) -> ImmutableIdSet {
        if let Some(b) = other.as_sorted() {
            return Self::from_sorted_unchecked(merge_intersect(&self.elements, b));
        }

        if self.len() <= other.len() {
            Self::from_sorted_unchecked(self.iter().filter(|id| other.contains(*id)).collect())
        } else {
            let mut elements: Vec<u32> = other.ids().filter(|id| self.contains(*id)).collect();
            elements.sort_unstable();
            Self::from_sorted_unchecked(elements)
        }
    }

    /// Elements of `self` that are not in `other`
    pub fn difference(&self, other: &dyn IdSet) -> ImmutableIdSet {
        match other.as_sorted() {
            Some(b) => Self::from_sorted_unchecked(merge_difference(&self.elements, b)),
            None => {
                Self::from_sorted_unchecked(self.iter().filter(|id| !other.contains(*id)).collect())
            }
        }
    }

    /// Set with `id` added
    pub fn union_element(&self, id: u32) -> ImmutableIdSet {
        match self.elements.binary_search(&id) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut elements = Vec::with_capacity(self.elements.len() + 1);
                elements.extend_from_slice(&self.elements[..pos]);
                elements.push(id);
                elements.extend_from_slice(&self.elements[pos..]);
                Self::from_sorted_unchecked(elements)
            }
        }
    }

    /// Set with `id` removed
    pub fn difference_element(&self, id: u32) -> ImmutableIdSet {
        match self.elements.binary_search(&id) {
            Ok(pos) => {
                let mut elements = self.elements.clone();
                elements.remove(pos);
                Self::from_sorted_unchecked(elements)
            }
            Err(_) => self.clone(),
        }
    }

    /// Union of many sets through a single k-way merge
    pub fn union_all<'a>(sets: impl IntoIterator<Item = &'a ImmutableIdSet>) -> ImmutableIdSet {
        let slices: Vec<&[u32]> = sets.into_iter().map(|s| s.as_slice()).collect();
        Self::from_sorted_unchecked(KWayMerge::new(slices).collect())
    }
}

fn merge_union(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

fn merge_intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

fn merge_difference(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(a.len());
    let mut j = 0;

    for &x in a {
        while j < b.len() && b[j] < x {
            j += 1;
        }
        if j >= b.len() || b[j] != x {
            result.push(x);
        }
    }
    result
}

impl IdSet for ImmutableIdSet {
    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn contains(&self, id: u32) -> bool {
        self.elements.binary_search(&id).is_ok()
    }

    fn ids(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        Box::new(self.iter())
    }

    #[inline]
    fn as_sorted(&self) -> Option<&[u32]> {
        Some(&self.elements)
    }

    fn as_dyn(&self) -> &dyn IdSet {
        self
    }
}

impl TryFrom<Vec<u32>> for ImmutableIdSet {
    type Error = DomainError;

    fn try_from(elements: Vec<u32>) -> Result<Self> {
        Self::from_sorted(elements)
    }
}

impl From<ImmutableIdSet> for Vec<u32> {
    fn from(set: ImmutableIdSet) -> Self {
        set.elements
    }
}

impl<'a> IntoIterator for &'a ImmutableIdSet {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ImmutableIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl fmt::Display for ImmutableIdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_id_string())
    }
}
