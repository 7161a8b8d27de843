//! Ranked-list pruning
//!
//! Given candidates sorted by score (descending), a [`CandidateSetFinder`]
//! returns the cut index `k`: candidates `[0, k)` are kept.
//!
//! | Finder             | Cut                                          |
//! |--------------------|----------------------------------------------|
//! | [`MaxDropFinder`]  | largest qualifying score gap (knee)          |
//! | [`ThresholdFinder`]| first score failing a fixed threshold        |

pub mod domain;
pub mod infrastructure;

pub use domain::{CandidateSetFinder, Scored};
pub use infrastructure::{MaxDropFinder, ThresholdFinder};
