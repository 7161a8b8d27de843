//! Similarity domain: comparable nodes and run statistics

pub mod node;
pub mod stats;

pub use node::{ClassElements, ElementSource, SimilarityNode};
pub use stats::SimilarityStats;
