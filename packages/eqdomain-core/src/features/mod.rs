//! Feature modules
//!
//! Each feature contains:
//! - domain/         - Types and traits
//! - infrastructure/ - Implementations
//!
//! Dependencies point downwards only:
//!
//! ```text
//! signature ──► prune
//!     │
//!     ▼
//! similarity ──► components ──► graph ──► id_set
//! ```

pub mod components;
pub mod graph;
pub mod id_set;
pub mod prune;
pub mod signature;
pub mod similarity;
