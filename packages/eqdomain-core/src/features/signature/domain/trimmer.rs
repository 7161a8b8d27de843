//! Trimmer and sink seams

use crate::errors::Result;
use crate::features::signature::domain::{Signature, TrimContext};

/// A signature trimming strategy
pub trait SignatureTrimmer: Send + Sync {
    /// Reduced signature; blocks keep their relative order
    fn trim(&self, signature: &Signature, context: &TrimContext<'_>) -> Result<Signature>;

    /// Strategy name for logs
    fn name(&self) -> &'static str;
}

/// Receiver of trimmed signatures; called concurrently by trimming workers
pub trait SignatureSink: Sync {
    fn emit(&self, signature: Signature) -> Result<()>;
}

impl<S: SignatureSink + ?Sized> SignatureSink for &S {
    fn emit(&self, signature: Signature) -> Result<()> {
        (**self).emit(signature)
    }
}
