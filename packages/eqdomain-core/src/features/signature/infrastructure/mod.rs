//! Signature infrastructure: scoring, trimmers, resolution, parallel runner

pub mod factory;
pub mod runner;
pub mod score;
pub mod trimmers;

pub use factory::{ResolvedTrimmer, TrimmerFactory};
pub use runner::{SignatureCollector, SignatureTrimRunner, TrimJob, TrimStats};
pub use score::{BlockScore, Precision, TermCount};
pub use trimmers::{
    CentristTrimmer, ColumnSupportTrimmer, ConservativeTrimmer, LiberalTrimmer,
    NonTrimmingTrimmer,
};
