//! Edge consumers
//!
//! Graph producers (the parallel similarity builder, edge lists) push edges
//! into an `EdgeSink`. Sinks must tolerate concurrent `edge()` calls from many
//! workers with no ordering between pairs.

use crate::errors::Result;

/// Graph-construction sink
pub trait EdgeSink: Sync {
    /// Record an edge between two node ids
    fn edge(&self, source: u32, target: u32) -> Result<()>;
}

impl<S: EdgeSink + ?Sized> EdgeSink for &S {
    fn edge(&self, source: u32, target: u32) -> Result<()> {
        (**self).edge(source, target)
    }
}
