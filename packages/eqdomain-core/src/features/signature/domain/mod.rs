//! Signature domain model

pub mod context;
pub mod policy;
pub mod signature;
pub mod trimmer;

pub use context::TrimContext;
pub use policy::TrimmerPolicy;
pub use signature::{Signature, SignatureBlock};
pub use trimmer::{SignatureSink, SignatureTrimmer};
