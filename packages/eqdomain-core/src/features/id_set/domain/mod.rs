//! Domain abstraction for id sets

pub mod id_set;

pub use id_set::IdSet;
