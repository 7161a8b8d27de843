//! Component listings
//!
//! A component is a set of node ids merged transitively by an edge relation
//! and keyed by one representative member. Listings iterate in ascending
//! representative order regardless of how they were computed.

use crate::features::id_set::{IdSet, ImmutableIdSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Representative id → member set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentSet {
    components: BTreeMap<u32, ImmutableIdSet>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key each non-empty group by its smallest member
    pub fn from_groups(groups: impl IntoIterator<Item = ImmutableIdSet>) -> Self {
        let components = groups
            .into_iter()
            .filter_map(|members| members.first().map(|rep| (rep, members)))
            .collect();
        Self { components }
    }

    pub(crate) fn insert(&mut self, representative: u32, members: ImmutableIdSet) {
        self.components.insert(representative, members);
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Members of the component with this representative
    pub fn get(&self, representative: u32) -> Option<&ImmutableIdSet> {
        self.components.get(&representative)
    }

    /// `(representative, members)` in ascending representative order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ImmutableIdSet)> {
        self.components.iter().map(|(rep, members)| (*rep, members))
    }

    /// Member sets in ascending representative order
    pub fn members(&self) -> impl Iterator<Item = &ImmutableIdSet> {
        self.components.values()
    }

    /// Representative of the component containing `node`
    pub fn component_of(&self, node: u32) -> Option<u32> {
        self.iter()
            .find(|(_, members)| members.contains(node))
            .map(|(rep, _)| rep)
    }

    /// Total number of member nodes over all components
    pub fn node_count(&self) -> usize {
        self.components.values().map(|members| members.len()).sum()
    }

    /// Largest component (smallest representative on ties)
    pub fn largest(&self) -> Option<(u32, &ImmutableIdSet)> {
        let mut best: Option<(u32, &ImmutableIdSet)> = None;
        for (rep, members) in self.iter() {
            if best.map_or(true, |(_, top)| members.len() > top.len()) {
                best = Some((rep, members));
            }
        }
        best
    }

    /// Member sets, largest first; equal sizes keep representative order
    pub fn by_size(&self) -> Vec<&ImmutableIdSet> {
        let mut sets: Vec<&ImmutableIdSet> = self.components.values().collect();
        sets.sort_by(|a, b| b.len().cmp(&a.len()));
        sets
    }

    pub fn into_sets(self) -> Vec<ImmutableIdSet> {
        self.components.into_values().collect()
    }
}

impl FromIterator<(u32, ImmutableIdSet)> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = (u32, ImmutableIdSet)>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}
