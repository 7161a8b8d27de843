//! Graph representations, traversal and builders

pub mod builder;
pub mod dense;
pub mod reversed;
pub mod sparse;
pub mod traversal;

pub use builder::{ConcurrentGraphBuilder, EdgeCollector};
pub use dense::DenseGraph;
pub use reversed::ReversedGraph;
pub use sparse::SparseGraph;
pub use traversal::{dfs_from, finish_order};
