//! # Graph Abstraction
//!
//! Directed graphs over a fixed node-id universe, with storage chosen by the
//! call site:
//!
//! | Representation   | `has_edge`   | `adjacent`         | Built            |
//! |------------------|--------------|--------------------|------------------|
//! | `DenseGraph`     | O(log n)     | O(n), degree-bound | fixed universe   |
//! | `SparseGraph`    | O(1) expected| O(degree)          | edge by edge     |
//! | `ReversedGraph`  | inner        | O(n) scan          | O(1), no storage |
//!
//! Undirected graphs are directed graphs with both directions inserted.
//! Edge producers write into any [`EdgeSink`].

pub mod domain;
pub mod infrastructure;

pub use domain::{Adjacency, EdgeSink, Graph, ReverseView};
pub use infrastructure::{
    dfs_from, finish_order, ConcurrentGraphBuilder, DenseGraph, EdgeCollector, ReversedGraph,
    SparseGraph,
};
