//! Shared data models
//!
//! - EquivalenceClass / NodeIndex: read-only node source
//! - ColumnIndex: column → member nodes
//! - Fraction: exact similarity values and thresholds

pub mod column_index;
pub mod equivalence_class;
pub mod fraction;

pub use column_index::ColumnIndex;
pub use equivalence_class::{EquivalenceClass, NodeIndex};
pub use fraction::Fraction;
