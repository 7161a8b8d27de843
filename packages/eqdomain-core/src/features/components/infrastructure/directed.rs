//! Directed connected components
//!
//! Collects edges into a dense matrix over a fixed universe and delegates to
//! the two-pass SCC computation. The listing is computed once and shared as
//! an `Arc` snapshot; a later edge invalidates it.

use crate::errors::Result;
use crate::features::components::domain::ComponentSet;
use crate::features::components::infrastructure::scc::strongly_connected_components;
use crate::features::graph::{DenseGraph, EdgeSink, Graph};
use crate::features::id_set::ImmutableIdSet;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug)]
struct DirectedState {
    graph: DenseGraph,
    snapshot: Option<Arc<ComponentSet>>,
}

/// Graph-backed component tracker for directed edges
#[derive(Debug)]
pub struct DirectedConnectedComponents {
    state: Mutex<DirectedState>,
}

impl DirectedConnectedComponents {
    pub fn new(nodes: ImmutableIdSet) -> Self {
        Self {
            state: Mutex::new(DirectedState {
                graph: DenseGraph::new(nodes),
                snapshot: None,
            }),
        }
    }

    /// Component listing; computed on first request after the last edge
    pub fn components(&self) -> Result<Arc<ComponentSet>> {
        let mut state = self.state.lock();
        if let Some(snapshot) = &state.snapshot {
            return Ok(Arc::clone(snapshot));
        }

        let components = Arc::new(strongly_connected_components(&state.graph)?);
        state.snapshot = Some(Arc::clone(&components));
        Ok(components)
    }

    /// Number of directed edges collected so far
    pub fn edge_count(&self) -> usize {
        self.state.lock().graph.edge_count()
    }
}

impl EdgeSink for DirectedConnectedComponents {
    fn edge(&self, source: u32, target: u32) -> Result<()> {
        let mut state = self.state.lock();
        if state.graph.add_edge(source, target)? {
            state.snapshot = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    fn tracker(nodes: &[u32]) -> DirectedConnectedComponents {
        DirectedConnectedComponents::new(ImmutableIdSet::from_sorted(nodes.to_vec()).unwrap())
    }

    #[test]
    fn test_snapshot_is_memoized() {
        let cc = tracker(&[1, 2, 3]);
        cc.edge(1, 2).unwrap();
        cc.edge(2, 1).unwrap();

        let first = cc.components().unwrap();
        let second = cc.components().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_new_edge_invalidates() {
        let cc = tracker(&[1, 2, 3]);
        cc.edge(1, 2).unwrap();
        let before = cc.components().unwrap();
        assert_eq!(before.len(), 3);

        cc.edge(2, 1).unwrap();
        let after = cc.components().unwrap();
        assert_eq!(after.len(), 2);
        // the old snapshot is untouched
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_duplicate_edge_keeps_snapshot() {
        let cc = tracker(&[1, 2]);
        cc.edge(1, 2).unwrap();
        let first = cc.components().unwrap();
        cc.edge(1, 2).unwrap();
        assert!(Arc::ptr_eq(&first, &cc.components().unwrap()));
        assert_eq!(cc.edge_count(), 1);
    }

    #[test]
    fn test_unknown_endpoint() {
        let cc = tracker(&[1, 2]);
        assert!(matches!(cc.edge(1, 3), Err(DomainError::UnknownNode(3))));
    }
}
