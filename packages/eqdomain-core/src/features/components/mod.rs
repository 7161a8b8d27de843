//! # Graph Components
//!
//! - **SCC**: two-pass DFS (reversed graph, then original)
//! - **Maximal cliques**: Bron–Kerbosch with pivoting, callback per clique
//! - **Directed components**: dense graph + memoized SCC snapshot
//! - **Undirected components**: incremental union, safe for concurrent edges
//!
//! Both component trackers are [`EdgeSink`](crate::features::graph::EdgeSink)s,
//! so the similarity builder can feed them directly.

pub mod domain;
pub mod infrastructure;

pub use domain::ComponentSet;
pub use infrastructure::{
    strongly_connected_components, strongly_connected_components_with_stats, CliqueCollector,
    DirectedConnectedComponents, MaximalCliqueFinder, SccStats, UndirectedConnectedComponents,
};
