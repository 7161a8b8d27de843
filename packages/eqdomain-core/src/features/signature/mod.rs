//! Signature trimming
//!
//! A signature lists, for one target node, blocks of candidate nodes ordered
//! from most to least similar. Trimming decides how many of those blocks
//! are real domain members.
//!
//! ```text
//! TrimmerConfig ──► TrimmerFactory ──► ResolvedTrimmer
//!                                          │
//! TrimJob (signature, column) ──► SignatureTrimRunner ──► SignatureSink
//! ```
//!
//! The policy is resolved once; workers share the resolved trimmer.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    Signature, SignatureBlock, SignatureSink, SignatureTrimmer, TrimContext, TrimmerPolicy,
};
pub use infrastructure::{
    BlockScore, CentristTrimmer, ColumnSupportTrimmer, ConservativeTrimmer, LiberalTrimmer,
    NonTrimmingTrimmer, Precision, ResolvedTrimmer, SignatureCollector, SignatureTrimRunner,
    TermCount, TrimJob, TrimStats, TrimmerFactory,
};
