//! Parallel signature trimming
//!
//! Jobs (a signature plus the column it must stay consistent with) are pushed
//! onto one shared queue. Workers pop a job, build its context, apply the
//! resolved trimmer and emit the result. Empty results are dropped when the
//! trimmer requires non-empty signatures.
//!
//! The first error (unknown column, unknown node, missing context, sink
//! failure) stops all workers and is returned once the pool has drained.

use crate::config::ValidatedConfig;
use crate::errors::{DomainError, Result};
use crate::features::signature::domain::{Signature, SignatureSink, TrimContext};
use crate::features::signature::infrastructure::factory::{ResolvedTrimmer, TrimmerFactory};
use crate::shared::models::{ColumnIndex, NodeIndex};
use crate::shared::worker_pool::{WorkQueue, WorkerPool};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::info;

/// One unit of trimming work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimJob {
    pub signature: Signature,
    /// Column whose members form the trimming context
    pub column: Option<u32>,
}

impl TrimJob {
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            column: None,
        }
    }

    pub fn in_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }
}

impl From<Signature> for TrimJob {
    fn from(signature: Signature) -> Self {
        Self::new(signature)
    }
}

/// Counters of one trimming run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimStats {
    pub processed: usize,
    pub emitted: usize,
    pub dropped_empty: usize,
}

/// Parallel driver for a resolved trimmer
#[derive(Debug)]
pub struct SignatureTrimRunner {
    trimmer: ResolvedTrimmer,
    pool: WorkerPool,
}

impl SignatureTrimRunner {
    pub fn new(trimmer: ResolvedTrimmer, pool: WorkerPool) -> Self {
        Self { trimmer, pool }
    }

    pub fn from_config(config: &ValidatedConfig) -> Self {
        Self::new(
            TrimmerFactory::from_config(config),
            WorkerPool::from_config(&config.parallel()),
        )
    }

    pub fn trimmer(&self) -> &ResolvedTrimmer {
        &self.trimmer
    }

    /// Trim every job and emit the results to `sink`
    pub fn run<S>(
        &self,
        jobs: impl IntoIterator<Item = TrimJob>,
        nodes: &NodeIndex,
        columns: Option<&ColumnIndex>,
        sink: &S,
    ) -> Result<TrimStats>
    where
        S: SignatureSink + ?Sized,
    {
        let queue: WorkQueue<TrimJob> = jobs.into_iter().collect();
        let processed = AtomicUsize::new(0);
        let emitted = AtomicUsize::new(0);
        let dropped = AtomicUsize::new(0);
        let abort = AtomicBool::new(false);
        let failure: Mutex<Option<DomainError>> = Mutex::new(None);

        self.pool.run(|_worker| {
            while !abort.load(Ordering::Relaxed) {
                let Some(job) = queue.pop() else {
                    break;
                };
                match self.process(job, nodes, columns, sink) {
                    Ok(true) => {
                        emitted.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(false) => {
                        dropped.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(err) => {
                        let mut slot = failure.lock();
                        if slot.is_none() {
                            *slot = Some(err);
                        }
                        abort.store(true, Ordering::Relaxed);
                        break;
                    }
                }
                processed.fetch_add(1, Ordering::Relaxed);
            }
        })?;

        if let Some(err) = failure.into_inner() {
            return Err(err);
        }

        let stats = TrimStats {
            processed: processed.into_inner(),
            emitted: emitted.into_inner(),
            dropped_empty: dropped.into_inner(),
        };
        info!(
            policy = %self.trimmer.policy(),
            processed = stats.processed,
            emitted = stats.emitted,
            dropped_empty = stats.dropped_empty,
            "signature trimming finished"
        );
        Ok(stats)
    }

    /// Returns whether a signature was emitted
    fn process<S>(
        &self,
        job: TrimJob,
        nodes: &NodeIndex,
        columns: Option<&ColumnIndex>,
        sink: &S,
    ) -> Result<bool>
    where
        S: SignatureSink + ?Sized,
    {
        let mut context = TrimContext::new(nodes);
        if let Some(column) = job.column {
            let index = columns.ok_or_else(|| {
                DomainError::MissingContext(format!(
                    "column {} requested without a column index",
                    column
                ))
            })?;
            context = context.with_column(index.get(column)?);
        }

        match self.trimmer.apply(&job.signature, &context)? {
            Some(trimmed) => {
                sink.emit(trimmed)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Sink that gathers trimmed signatures keyed by target node
#[derive(Debug, Default)]
pub struct SignatureCollector {
    signatures: Mutex<BTreeMap<u32, Signature>>,
}

impl SignatureCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.signatures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.lock().is_empty()
    }

    /// Signatures in ascending node order
    pub fn into_signatures(self) -> Vec<Signature> {
        self.signatures.into_inner().into_values().collect()
    }
}

impl SignatureSink for SignatureCollector {
    fn emit(&self, signature: Signature) -> Result<()> {
        let node = signature.node();
        match self.signatures.lock().entry(node) {
            Entry::Occupied(_) => Err(DomainError::invalid_input(format!(
                "signature for node {} emitted twice",
                node
            ))),
            Entry::Vacant(slot) => {
                slot.insert(signature);
                Ok(())
            }
        }
    }
}
