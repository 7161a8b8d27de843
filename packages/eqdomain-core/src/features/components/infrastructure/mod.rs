//! Component algorithms

pub mod cliques;
pub mod directed;
pub mod scc;
pub mod undirected;

pub use cliques::{CliqueCollector, MaximalCliqueFinder};
pub use directed::DirectedConnectedComponents;
pub use scc::{strongly_connected_components, strongly_connected_components_with_stats, SccStats};
pub use undirected::UndirectedConnectedComponents;
