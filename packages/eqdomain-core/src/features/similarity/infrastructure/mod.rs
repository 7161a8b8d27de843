//! Similarity infrastructure

pub mod builder;

pub use builder::SimilarityGraphBuilder;
