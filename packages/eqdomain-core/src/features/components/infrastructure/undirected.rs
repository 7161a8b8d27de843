//! Undirected connected components (incremental union)
//!
//! State, guarded by one lock:
//! - `representative[id]`: current component representative of each node
//!   (`None` while the node has no edge), sized to the largest node id
//! - `members[rep]`: live member set of each materialized component
//!
//! `edge(u, v)` merges the smaller member set into the larger one and
//! rewrites the representative of every migrated member. Nodes without edges
//! are never materialized; they are listed as singletons on request.
//!
//! # Performance Characteristics
//! - `edge`: O(min(|A|, |B|)) per merge, so O(n log n) total member moves
//! - `component_count`: O(1)
//! - Memory: one slot per id up to the largest id

use crate::errors::{DomainError, Result};
use crate::features::components::domain::ComponentSet;
use crate::features::graph::EdgeSink;
use crate::features::id_set::{HashIdSet, IdSet, ImmutableIdSet};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug)]
struct UnionState {
    representative: Vec<Option<u32>>,
    members: FxHashMap<u32, HashIdSet>,
    /// Nodes that belong to a materialized component
    clustered: usize,
    merges: usize,
}

impl UnionState {
    #[inline]
    fn rep(&self, id: u32) -> Option<u32> {
        self.representative[id as usize]
    }

    fn merge(&mut self, a: u32, b: u32) {
        let (keep, drop) = match (self.members.get(&a), self.members.get(&b)) {
            (Some(left), Some(right)) if left.len() < right.len() => (b, a),
            _ => (a, b),
        };
        let Some(moved) = self.members.remove(&drop) else {
            return;
        };
        for id in moved.iter() {
            self.representative[id as usize] = Some(keep);
        }
        self.members.entry(keep).or_default().add_all(moved.iter());
        self.merges += 1;
    }

    fn join(&mut self, component: u32, id: u32) {
        self.members.entry(component).or_default().add(id);
        self.representative[id as usize] = Some(component);
        self.clustered += 1;
    }
}

/// Union-based component tracker for undirected edges
#[derive(Debug)]
pub struct UndirectedConnectedComponents {
    nodes: ImmutableIdSet,
    state: Mutex<UnionState>,
}

impl UndirectedConnectedComponents {
    pub fn new(nodes: ImmutableIdSet) -> Self {
        let slots = nodes.last().map(|max| max as usize + 1).unwrap_or(0);
        Self {
            nodes,
            state: Mutex::new(UnionState {
                representative: vec![None; slots],
                members: FxHashMap::default(),
                clustered: 0,
                merges: 0,
            }),
        }
    }

    /// The node universe
    pub fn nodes(&self) -> &ImmutableIdSet {
        &self.nodes
    }

    /// Add an edge from `node` to every member of `adjacent`
    pub fn add(&self, node: u32, adjacent: &dyn IdSet) -> Result<()> {
        for target in adjacent.ids() {
            self.edge(node, target)?;
        }
        Ok(())
    }

    /// Number of components, unclustered singletons included
    pub fn component_count(&self) -> usize {
        let state = self.state.lock();
        state.members.len() + (self.nodes.len() - state.clustered)
    }

    /// Number of components that have at least one edge
    pub fn materialized_count(&self) -> usize {
        self.state.lock().members.len()
    }

    /// Representative of the component containing `node`
    pub fn component_of(&self, node: u32) -> Result<u32> {
        if !self.nodes.contains(node) {
            return Err(DomainError::UnknownNode(node));
        }
        Ok(self.state.lock().rep(node).unwrap_or(node))
    }

    /// Full listing with singletons synthesized for unclustered nodes
    pub fn components(&self) -> ComponentSet {
        let state = self.state.lock();
        let mut components: ComponentSet = state
            .members
            .iter()
            .map(|(rep, members)| (*rep, members.to_immutable()))
            .collect();

        for id in self.nodes.iter() {
            if state.rep(id).is_none() {
                components.insert(id, ImmutableIdSet::singleton(id));
            }
        }

        debug!(
            components = components.len(),
            materialized = state.members.len(),
            merges = state.merges,
            "undirected components listed"
        );
        components
    }
}

impl EdgeSink for UndirectedConnectedComponents {
    fn edge(&self, source: u32, target: u32) -> Result<()> {
        for id in [source, target] {
            if !self.nodes.contains(id) {
                return Err(DomainError::UnknownNode(id));
            }
        }
        if source == target {
            return Ok(());
        }

        let mut state = self.state.lock();
        match (state.rep(source), state.rep(target)) {
            (Some(a), Some(b)) if a == b => {}
            (Some(a), Some(b)) => state.merge(a, b),
            (Some(a), None) => state.join(a, target),
            (None, Some(b)) => state.join(b, source),
            (None, None) => {
                let rep = source.min(target);
                state.join(rep, source);
                state.join(rep, target);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn tracker(nodes: &[u32]) -> UndirectedConnectedComponents {
        UndirectedConnectedComponents::new(ImmutableIdSet::from_sorted(nodes.to_vec()).unwrap())
    }

    fn groups(cc: &UndirectedConnectedComponents) -> Vec<Vec<u32>> {
        cc.components().members().map(|m| m.to_sorted_vec()).collect()
    }

    #[test]
    fn test_bridging_edge_merges() {
        let cc = tracker(&[1, 2, 3, 4]);
        cc.edge(1, 2).unwrap();
        cc.edge(3, 4).unwrap();
        assert_eq!(cc.component_count(), 2);

        cc.edge(2, 3).unwrap();
        assert_eq!(cc.component_count(), 1);
        assert_eq!(groups(&cc), vec![vec![1, 2, 3, 4]]);

        cc.edge(1, 2).unwrap();
        assert_eq!(cc.component_count(), 1);
    }

    #[test]
    fn test_singletons_synthesized() {
        let cc = tracker(&[1, 2, 5, 9]);
        cc.edge(2, 9).unwrap();
        assert_eq!(cc.materialized_count(), 1);
        assert_eq!(cc.component_count(), 3);
        assert_eq!(groups(&cc), vec![vec![1], vec![2, 9], vec![5]]);
        assert_eq!(cc.component_of(5).unwrap(), 5);
        assert_eq!(cc.component_of(9).unwrap(), 2);
    }

    #[test]
    fn test_smaller_merges_into_larger() {
        let cc = tracker(&[1, 2, 3, 10, 11]);
        cc.edge(10, 11).unwrap();
        cc.edge(1, 2).unwrap();
        cc.edge(2, 3).unwrap();
        // {10,11} is smaller, so it adopts representative 1
        cc.edge(11, 3).unwrap();
        assert_eq!(cc.component_of(10).unwrap(), 1);
        assert_eq!(cc.materialized_count(), 1);
    }

    #[test]
    fn test_self_edge_and_unknown() {
        let cc = tracker(&[1, 2]);
        cc.edge(1, 1).unwrap();
        assert_eq!(cc.materialized_count(), 0);
        assert!(matches!(cc.edge(1, 4), Err(DomainError::UnknownNode(4))));
        assert!(matches!(cc.component_of(4), Err(DomainError::UnknownNode(4))));
    }

    #[test]
    fn test_add_adjacency() {
        let cc = tracker(&[1, 2, 3, 4]);
        let adjacent = ImmutableIdSet::from_sorted(vec![2, 3]).unwrap();
        cc.add(1, &adjacent).unwrap();
        assert_eq!(groups(&cc), vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn test_concurrent_chain() {
        let nodes: Vec<u32> = (0..1000).collect();
        let cc = Arc::new(tracker(&nodes));
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let cc = Arc::clone(&cc);
                thread::spawn(move || {
                    let mut i = t;
                    while i + 1 < 1000 {
                        cc.edge(i, i + 1).unwrap();
                        i += 4;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cc.component_count(), 1);
        assert_eq!(cc.components().members().next().map(|m| m.len()), Some(1000));
    }
}
