//! Directed graph over a fixed node-id universe
//!
//! Storage is pluggable; the call site picks the representation:
//! - [`DenseGraph`](crate::features::graph::DenseGraph): boolean matrix
//! - [`SparseGraph`](crate::features::graph::SparseGraph): adjacency map
//! - [`ReversedGraph`](crate::features::graph::ReversedGraph): lazy edge flip
//!
//! Graphs are semantically directed. Undirected graphs are built by inserting
//! both directions of every edge.

use crate::errors::Result;
use crate::features::graph::infrastructure::reversed::ReversedGraph;
use crate::features::id_set::{IdSet, ImmutableIdSet};

/// Lazy, finite, non-restartable neighbor sequence
pub type Adjacency<'a> = Box<dyn Iterator<Item = u32> + 'a>;

/// Directed graph abstraction
pub trait Graph: Send + Sync {
    /// The fixed node-id universe
    fn nodes(&self) -> &ImmutableIdSet;

    /// Edge test. Ids outside the universe have no edges.
    fn has_edge(&self, source: u32, target: u32) -> bool;

    /// Out-neighbors of `node`. Unknown ids are a fatal lookup error.
    fn adjacent(&self, node: u32) -> Result<Adjacency<'_>>;

    /// The graph with every edge flipped
    fn reverse(&self) -> ReverseView<'_>;

    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    fn contains_node(&self, node: u32) -> bool {
        self.nodes().contains(node)
    }

    /// Number of directed edges
    fn edge_count(&self) -> usize {
        self.nodes()
            .iter()
            .map(|node| self.adjacent(node).map(|adj| adj.count()).unwrap_or(0))
            .sum()
    }
}

/// Result of [`Graph::reverse`]
///
/// Reversing a plain graph wraps it; reversing a wrapper hands back the
/// original graph, so views never stack.
pub enum ReverseView<'a> {
    Reversed(ReversedGraph<'a>),
    Original(&'a dyn Graph),
}

impl<'a> ReverseView<'a> {
    fn as_graph(&self) -> &dyn Graph {
        match self {
            ReverseView::Reversed(graph) => graph,
            ReverseView::Original(graph) => *graph,
        }
    }

    /// True if this view is a lazy wrapper rather than an original graph
    pub fn is_wrapper(&self) -> bool {
        matches!(self, ReverseView::Reversed(_))
    }
}

impl<'a> Graph for ReverseView<'a> {
    fn nodes(&self) -> &ImmutableIdSet {
        self.as_graph().nodes()
    }

    fn has_edge(&self, source: u32, target: u32) -> bool {
        self.as_graph().has_edge(source, target)
    }

    fn adjacent(&self, node: u32) -> Result<Adjacency<'_>> {
        self.as_graph().adjacent(node)
    }

    fn reverse(&self) -> ReverseView<'_> {
        match self {
            ReverseView::Reversed(graph) => graph.reverse(),
            ReverseView::Original(graph) => graph.reverse(),
        }
    }
}

impl std::fmt::Debug for ReverseView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReverseView")
            .field("wrapper", &self.is_wrapper())
            .field("nodes", &self.node_count())
            .finish()
    }
}
