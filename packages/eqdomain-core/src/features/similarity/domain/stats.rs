//! Similarity run statistics

use serde::{Deserialize, Serialize};

/// Counters of one similarity-graph build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityStats {
    /// Nodes in the input collection
    pub nodes: usize,
    /// Unordered pairs evaluated
    pub comparisons: u64,
    /// Pairs with non-zero element overlap
    pub overlapping: u64,
    /// Edges emitted to the sink
    pub edges: u64,
    /// Worker threads used
    pub workers: usize,
}

impl SimilarityStats {
    /// Fraction of evaluated pairs that became edges
    pub fn edge_ratio(&self) -> f64 {
        if self.comparisons == 0 {
            0.0
        } else {
            self.edges as f64 / self.comparisons as f64
        }
    }
}
