//! Lazy reversal wrapper
//!
//! Zero extra storage: `has_edge` swaps its arguments, `adjacent` scans the
//! whole universe (O(n) per query).

use crate::errors::{DomainError, Result};
use crate::features::graph::domain::{Adjacency, Graph, ReverseView};
use crate::features::id_set::ImmutableIdSet;

/// Borrowed view of a graph with every edge flipped
#[derive(Clone, Copy)]
pub struct ReversedGraph<'a> {
    inner: &'a dyn Graph,
}

impl<'a> ReversedGraph<'a> {
    pub fn new(inner: &'a dyn Graph) -> Self {
        Self { inner }
    }

    /// The wrapped (unreversed) graph
    pub fn inner(&self) -> &'a dyn Graph {
        self.inner
    }
}

impl<'a> Graph for ReversedGraph<'a> {
    fn nodes(&self) -> &ImmutableIdSet {
        self.inner.nodes()
    }

    fn has_edge(&self, source: u32, target: u32) -> bool {
        self.inner.has_edge(target, source)
    }

    fn adjacent(&self, node: u32) -> Result<Adjacency<'_>> {
        if !self.inner.contains_node(node) {
            return Err(DomainError::UnknownNode(node));
        }
        let inner = self.inner;
        Ok(Box::new(
            inner
                .nodes()
                .iter()
                .filter(move |&source| inner.has_edge(source, node)),
        ))
    }

    fn reverse(&self) -> ReverseView<'_> {
        ReverseView::Original(self.inner)
    }
}

impl std::fmt::Debug for ReversedGraph<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReversedGraph")
            .field("nodes", &self.inner.node_count())
            .finish()
    }
}
