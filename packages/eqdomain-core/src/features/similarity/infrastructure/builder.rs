//! Parallel all-pairs similarity-graph builder
//!
//! ```text
//! nodes ──sort by id──► [n0, n1, n2, ...]  (shared, read-only)
//!                              │
//!                        WorkQueue<index>
//!                     ┌────────┼────────┐
//!                  worker   worker   worker
//!                     │  scan j < i, Jaccard(i, j)
//!                     └──► sink.edge(i, j) (concurrent)
//! ```
//!
//! Each unordered pair is evaluated exactly once: the inner scan over the
//! id-sorted list stops at the first node whose id is not below the popped
//! node's id. Pairs without any common element are skipped before the
//! Jaccard index is formed.
//!
//! The first sink error raises an abort flag; workers stop popping and the
//! error is returned once the pool has drained.

use crate::config::{ParallelConfig, SimilarityConfig, Threshold};
use crate::errors::{DomainError, Result};
use crate::features::graph::EdgeSink;
use crate::features::id_set::{jaccard, sorted_overlap};
use crate::features::similarity::domain::{ElementSource, SimilarityNode, SimilarityStats};
use crate::shared::models::NodeIndex;
use crate::shared::worker_pool::{WorkQueue, WorkerPool};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::info;

/// All-pairs similarity engine
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    threshold: Threshold,
    pool: WorkerPool,
}

/// Counters shared by all workers of one run
#[derive(Default)]
struct RunCounters {
    comparisons: AtomicU64,
    overlapping: AtomicU64,
    edges: AtomicU64,
}

impl SimilarityGraphBuilder {
    /// Builder with `workers` threads (0 = auto)
    pub fn new(threshold: Threshold, workers: usize) -> Self {
        Self {
            threshold,
            pool: WorkerPool::new(workers),
        }
    }

    pub fn from_config(similarity: &SimilarityConfig, parallel: &ParallelConfig) -> Self {
        Self {
            threshold: similarity.threshold,
            pool: WorkerPool::from_config(parallel),
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn workers(&self) -> usize {
        self.pool.workers()
    }

    /// Compare every pair of `nodes` and report qualifying pairs to `sink`.
    ///
    /// Blocks until all workers have exited.
    pub fn run<N, S>(&self, nodes: &[N], sink: &S) -> Result<SimilarityStats>
    where
        N: SimilarityNode,
        S: EdgeSink + ?Sized,
    {
        let mut sorted: Vec<&N> = nodes.iter().collect();
        sorted.sort_by_key(|node| node.id());

        let queue: WorkQueue<usize> = (0..sorted.len()).collect();
        let counters = RunCounters::default();
        let abort = AtomicBool::new(false);
        let failure: Mutex<Option<DomainError>> = Mutex::new(None);

        self.pool.run(|_worker| {
            let mut local = (0u64, 0u64, 0u64);
            while !abort.load(Ordering::Relaxed) {
                let Some(i) = queue.pop() else {
                    break;
                };
                if let Err(err) = self.scan(&sorted, i, sink, &mut local) {
                    let mut slot = failure.lock();
                    if slot.is_none() {
                        *slot = Some(err);
                    }
                    abort.store(true, Ordering::Relaxed);
                    break;
                }
            }
            counters.comparisons.fetch_add(local.0, Ordering::Relaxed);
            counters.overlapping.fetch_add(local.1, Ordering::Relaxed);
            counters.edges.fetch_add(local.2, Ordering::Relaxed);
        })?;

        if let Some(err) = failure.into_inner() {
            return Err(err);
        }

        let stats = SimilarityStats {
            nodes: sorted.len(),
            comparisons: counters.comparisons.into_inner(),
            overlapping: counters.overlapping.into_inner(),
            edges: counters.edges.into_inner(),
            workers: self.pool.workers(),
        };
        info!(
            nodes = stats.nodes,
            comparisons = stats.comparisons,
            edges = stats.edges,
            workers = stats.workers,
            threshold = %self.threshold,
            "similarity graph built"
        );
        Ok(stats)
    }

    /// [`run`](Self::run) over equivalence classes, comparing the selected
    /// element array
    pub fn run_classes<S>(
        &self,
        nodes: &NodeIndex,
        source: ElementSource,
        sink: &S,
    ) -> Result<SimilarityStats>
    where
        S: EdgeSink + ?Sized,
    {
        let views: Vec<_> = nodes.nodes().iter().map(|class| source.view(class)).collect();
        self.run(&views, sink)
    }

    /// Compare node `i` against every node with a smaller id.
    /// `local` is (comparisons, overlapping, edges).
    fn scan<N, S>(
        &self,
        sorted: &[&N],
        i: usize,
        sink: &S,
        local: &mut (u64, u64, u64),
    ) -> Result<()>
    where
        N: SimilarityNode,
        S: EdgeSink + ?Sized,
    {
        let node = sorted[i];
        let id = node.id();
        let elements = node.elements().as_slice();

        for other in sorted {
            if other.id() >= id {
                break;
            }
            local.0 += 1;

            let candidate = other.elements().as_slice();
            let overlap = sorted_overlap(elements, candidate);
            if overlap == 0 {
                continue;
            }
            local.1 += 1;

            let similarity = jaccard(elements.len(), candidate.len(), overlap);
            if self.threshold.is_satisfied_by(similarity) {
                sink.edge(id, other.id())?;
                local.2 += 1;
            }
        }
        Ok(())
    }
}
