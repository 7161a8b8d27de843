//! Parallel similarity-graph construction
//!
//! Nodes are compared pairwise by the Jaccard index of their element arrays
//! (terms or columns). Every qualifying pair is handed to an
//! [`EdgeSink`](crate::features::graph::EdgeSink): a component tracker, a
//! graph builder or an edge collector.
//!
//! ```rust,ignore
//! let builder = SimilarityGraphBuilder::from_config(&config.similarity(), &config.parallel());
//! let tracker = UndirectedConnectedComponents::new(index.ids().clone());
//! let stats = builder.run_classes(&index, config.similarity().source, &tracker)?;
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{ClassElements, ElementSource, SimilarityNode, SimilarityStats};
pub use infrastructure::SimilarityGraphBuilder;
