//! Dense adjacency-matrix graph
//!
//! Fixed node universe, boolean n×n grid. Node ids are remapped to matrix
//! rows/columns through the sorted universe, so ids may be sparse.
//!
//! # Performance Characteristics
//! - `has_edge`: O(log n) id remap + O(1) cell test
//! - `adjacent`: scans one row, stops after `out_degree` true cells
//! - Memory: n² bytes

use crate::errors::{DomainError, Result};
use crate::features::graph::domain::{Adjacency, Graph, ReverseView};
use crate::features::graph::infrastructure::reversed::ReversedGraph;
use crate::features::id_set::{IdSet, ImmutableIdSet};

/// Boolean-matrix graph over a fixed universe
#[derive(Debug, Clone)]
pub struct DenseGraph {
    nodes: ImmutableIdSet,
    /// Row-major n×n cells
    matrix: Vec<bool>,
    out_degree: Vec<usize>,
}

impl DenseGraph {
    /// Create an edgeless graph over `nodes`
    pub fn new(nodes: ImmutableIdSet) -> Self {
        let n = nodes.len();
        Self {
            nodes,
            matrix: vec![false; n * n],
            out_degree: vec![0; n],
        }
    }

    #[inline]
    fn index_of(&self, id: u32) -> Result<usize> {
        self.nodes.index_of(id).ok_or(DomainError::UnknownNode(id))
    }

    /// Insert `source → target`. Returns false if the edge already existed.
    pub fn add_edge(&mut self, source: u32, target: u32) -> Result<bool> {
        let row = self.index_of(source)?;
        let col = self.index_of(target)?;
        let cell = &mut self.matrix[row * self.nodes.len() + col];
        if *cell {
            return Ok(false);
        }
        *cell = true;
        self.out_degree[row] += 1;
        Ok(true)
    }

    /// Insert both directions of an edge
    pub fn add_undirected_edge(&mut self, a: u32, b: u32) -> Result<bool> {
        let forward = self.add_edge(a, b)?;
        let backward = self.add_edge(b, a)?;
        Ok(forward || backward)
    }

    /// Out-degree of a node
    pub fn out_degree(&self, node: u32) -> Result<usize> {
        Ok(self.out_degree[self.index_of(node)?])
    }
}

impl Graph for DenseGraph {
    fn nodes(&self) -> &ImmutableIdSet {
        &self.nodes
    }

    fn has_edge(&self, source: u32, target: u32) -> bool {
        match (self.nodes.index_of(source), self.nodes.index_of(target)) {
            (Some(row), Some(col)) => self.matrix[row * self.nodes.len() + col],
            _ => false,
        }
    }

    fn adjacent(&self, node: u32) -> Result<Adjacency<'_>> {
        let row = self.index_of(node)?;
        let n = self.nodes.len();
        let ids = self.nodes.as_slice();
        let cells = &self.matrix[row * n..(row + 1) * n];

        Ok(Box::new(
            cells
                .iter()
                .enumerate()
                .filter(|(_, edge)| **edge)
                .map(move |(col, _)| ids[col])
                .take(self.out_degree[row]),
        ))
    }

    fn reverse(&self) -> ReverseView<'_> {
        ReverseView::Reversed(ReversedGraph::new(self))
    }

    fn edge_count(&self) -> usize {
        self.out_degree.iter().sum()
    }
}
