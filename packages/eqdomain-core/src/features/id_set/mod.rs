//! # Id Set Algebra
//!
//! Sets of unique `u32` identifiers are the currency between every stage of
//! the discovery pipeline: equivalence-class terms and columns, graph node
//! universes and neighbor lists, components, cliques and signature blocks.
//!
//! - **ImmutableIdSet**: strictly ascending array, algebra returns new sets
//! - **HashIdSet**: hash-backed, incremental add/remove
//! - **KWayMerge**: ascending union of several sorted inputs
//!
//! ## Usage
//! ```text
//! use eqdomain_core::features::id_set::{IdSet, ImmutableIdSet};
//!
//! let a = ImmutableIdSet::from_sorted(vec![1, 3, 5])?;
//! let b = ImmutableIdSet::from_sorted(vec![3, 5, 7])?;
//! assert_eq!(a.overlap(&b), 2);
//! assert_eq!(a.ji(&b), Fraction::new(2, 4));
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::IdSet;
pub use infrastructure::immutable::ImmutableIdSet;
pub use infrastructure::merge::KWayMerge;
pub use infrastructure::mutable::HashIdSet;
pub use infrastructure::overlap::{jaccard, sorted_overlap, sorted_overlaps};
