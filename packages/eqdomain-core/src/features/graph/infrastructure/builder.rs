//! Concurrent edge sinks that materialize graphs
//!
//! - [`ConcurrentGraphBuilder`]: sharded neighbor map, yields a [`SparseGraph`]
//! - [`EdgeCollector`]: ordered edge list (exports, determinism checks)

use crate::errors::{DomainError, Result};
use crate::features::graph::domain::EdgeSink;
use crate::features::graph::infrastructure::sparse::SparseGraph;
use crate::features::id_set::{HashIdSet, IdSet, ImmutableIdSet};
use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::collections::BTreeSet;

/// Undirected graph builder safe under concurrent `edge()` calls
///
/// Each edge inserts both directions. With a node universe, endpoints outside
/// it are rejected with `UnknownNode`; without one, the universe is derived
/// from the edges seen.
#[derive(Debug, Default)]
pub struct ConcurrentGraphBuilder {
    universe: Option<ImmutableIdSet>,
    adjacency: DashMap<u32, HashIdSet, FxBuildHasher>,
}

impl ConcurrentGraphBuilder {
    /// Builder with an open universe
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder restricted to a fixed universe
    pub fn with_nodes(nodes: ImmutableIdSet) -> Self {
        Self {
            universe: Some(nodes),
            adjacency: DashMap::default(),
        }
    }

    fn check(&self, id: u32) -> Result<()> {
        match &self.universe {
            Some(nodes) if !nodes.contains(id) => Err(DomainError::UnknownNode(id)),
            _ => Ok(()),
        }
    }

    /// Freeze into an immutable-universe sparse graph
    pub fn build(self) -> SparseGraph {
        let adjacency: FxHashMap<u32, HashIdSet> = self.adjacency.into_iter().collect();
        let nodes = self
            .universe
            .map(|nodes| nodes.to_sorted_vec())
            .unwrap_or_default();
        SparseGraph::from_adjacency(nodes, adjacency)
    }

    /// Number of nodes with at least one edge so far
    pub fn touched_nodes(&self) -> usize {
        self.adjacency.len()
    }
}

impl EdgeSink for ConcurrentGraphBuilder {
    fn edge(&self, source: u32, target: u32) -> Result<()> {
        self.check(source)?;
        self.check(target)?;
        // One shard lock at a time; holding both entries could deadlock.
        self.adjacency.entry(source).or_default().add(target);
        self.adjacency.entry(target).or_default().add(source);
        Ok(())
    }
}

/// Edge sink that records normalized `(min, max)` pairs in sorted order
#[derive(Debug, Default)]
pub struct EdgeCollector {
    edges: Mutex<BTreeSet<(u32, u32)>>,
}

impl EdgeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.lock().is_empty()
    }

    /// Sorted, deduplicated undirected edges
    pub fn into_edges(self) -> Vec<(u32, u32)> {
        self.edges.into_inner().into_iter().collect()
    }
}

impl EdgeSink for EdgeCollector {
    fn edge(&self, source: u32, target: u32) -> Result<()> {
        let pair = if source <= target {
            (source, target)
        } else {
            (target, source)
        };
        self.edges.lock().insert(pair);
        Ok(())
    }
}
