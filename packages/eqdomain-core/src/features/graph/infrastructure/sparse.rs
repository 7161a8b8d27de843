//! Sparse adjacency-map graph
//!
//! Node id → mutable neighbor set. Suited to graphs built edge by edge whose
//! size is not known up front (similarity graphs, edge lists).

use crate::errors::{DomainError, Result};
use crate::features::graph::domain::{Adjacency, Graph, ReverseView};
use crate::features::graph::infrastructure::reversed::ReversedGraph;
use crate::features::id_set::{HashIdSet, IdSet, ImmutableIdSet};
use rustc_hash::FxHashMap;

/// Hash-map adjacency graph
#[derive(Debug, Clone, Default)]
pub struct SparseGraph {
    nodes: ImmutableIdSet,
    adjacency: FxHashMap<u32, HashIdSet>,
}

impl SparseGraph {
    /// Create an edgeless graph over a fixed universe
    pub fn new(nodes: ImmutableIdSet) -> Self {
        Self {
            nodes,
            adjacency: FxHashMap::default(),
        }
    }

    /// Build from directed edges; the universe is `nodes` plus every endpoint
    pub fn from_edges(
        nodes: impl IntoIterator<Item = u32>,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Self {
        let mut universe: Vec<u32> = nodes.into_iter().collect();
        let mut adjacency: FxHashMap<u32, HashIdSet> = FxHashMap::default();
        for (source, target) in edges {
            universe.push(source);
            universe.push(target);
            adjacency.entry(source).or_default().add(target);
        }

        Self {
            nodes: ImmutableIdSet::collect_unique(universe),
            adjacency,
        }
    }

    /// Assemble from a prepared neighbor map. Endpoints join the universe.
    pub(crate) fn from_adjacency(
        nodes: impl IntoIterator<Item = u32>,
        adjacency: FxHashMap<u32, HashIdSet>,
    ) -> Self {
        let universe = nodes
            .into_iter()
            .chain(adjacency.keys().copied())
            .chain(adjacency.values().flat_map(|neighbors| neighbors.iter()))
            .collect::<Vec<_>>();

        Self {
            nodes: ImmutableIdSet::collect_unique(universe),
            adjacency,
        }
    }

    /// Insert `source → target`. Both ids must be in the universe.
    pub fn add_edge(&mut self, source: u32, target: u32) -> Result<bool> {
        for id in [source, target] {
            if !self.nodes.contains(id) {
                return Err(DomainError::UnknownNode(id));
            }
        }
        Ok(self.adjacency.entry(source).or_default().add(target))
    }

    /// Insert both directions of an edge
    pub fn add_undirected_edge(&mut self, a: u32, b: u32) -> Result<bool> {
        let forward = self.add_edge(a, b)?;
        let backward = self.add_edge(b, a)?;
        Ok(forward || backward)
    }

    /// Neighbor set of a node, if it has any out-edges
    pub fn neighbors(&self, node: u32) -> Option<&HashIdSet> {
        self.adjacency.get(&node)
    }
}

impl Graph for SparseGraph {
    fn nodes(&self) -> &ImmutableIdSet {
        &self.nodes
    }

    fn has_edge(&self, source: u32, target: u32) -> bool {
        self.adjacency
            .get(&source)
            .map(|neighbors| neighbors.contains(target))
            .unwrap_or(false)
    }

    fn adjacent(&self, node: u32) -> Result<Adjacency<'_>> {
        if !self.nodes.contains(node) {
            return Err(DomainError::UnknownNode(node));
        }
        match self.adjacency.get(&node) {
            Some(neighbors) => Ok(Box::new(neighbors.iter())),
            None => Ok(Box::new(std::iter::empty())),
        }
    }

    fn reverse(&self) -> ReverseView<'_> {
        ReverseView::Reversed(ReversedGraph::new(self))
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }
}
