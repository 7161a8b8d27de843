//! Component domain types

pub mod component_set;

pub use component_set::ComponentSet;
