//! Graph domain: the `Graph` trait and edge sinks

pub mod edge_sink;
pub mod graph;

pub use edge_sink::EdgeSink;
pub use graph::{Adjacency, Graph, ReverseView};
