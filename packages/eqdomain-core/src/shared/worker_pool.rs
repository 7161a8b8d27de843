//! Worker pool for parallel phases
//!
//! Parallel phases (similarity-graph construction, signature trimming) share
//! one execution model:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ WorkerPool                                                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  1. Resolve worker count (0 = auto from available cores)         │
//! │  2. Build a dedicated Rayon pool with named threads              │
//! │  3. Spawn one long-running task per worker inside a scope        │
//! │  4. Each task pops units of work from a shared WorkQueue         │
//! │  5. Caller blocks until the queue is drained and all tasks exit  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A panic inside a worker aborts the whole phase and surfaces as
//! [`DomainError::WorkerPool`]; partial results are never salvaged.

use crate::config::ParallelConfig;
use crate::errors::{DomainError, Result};
use parking_lot::Mutex;
use rayon::ThreadPoolBuilder;
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// Upper bound on configured workers
pub const MAX_WORKERS: usize = 256;

/// Default worker thread stack size (8MB)
const DEFAULT_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Resolve a configured worker count: 0 means one worker per available core
pub fn resolve_workers(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested.min(MAX_WORKERS)
    }
}

/// Sized pool of worker threads for one parallel phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    workers: usize,
    stack_size: usize,
}

impl WorkerPool {
    /// Create a pool description (0 = auto)
    pub fn new(workers: usize) -> Self {
        Self {
            workers: resolve_workers(workers),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }

    /// Create from parallel config
    pub fn from_config(config: &ParallelConfig) -> Self {
        Self {
            workers: resolve_workers(config.num_workers),
            stack_size: config.stack_size_mb.max(1) * 1024 * 1024,
        }
    }

    /// Set thread stack size in bytes
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = bytes.max(64 * 1024);
        self
    }

    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `task(worker_index)` once on each worker and block until all exit.
    ///
    /// Tasks are expected to loop over a shared [`WorkQueue`] until it is
    /// empty.
    pub fn run<F>(&self, task: F) -> Result<()>
    where
        F: Fn(usize) + Sync,
    {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .stack_size(self.stack_size)
            .thread_name(|i| format!("eqdomain-worker-{}", i))
            .build()
            .map_err(|e| DomainError::worker_pool(format!("failed to build thread pool: {}", e)))?;

        debug!(workers = self.workers, "worker pool started");

        let task = &task;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            pool.scope(|scope| {
                for worker in 0..self.workers {
                    scope.spawn(move |_| task(worker));
                }
            })
        }));

        outcome.map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "worker panicked".to_string());
            DomainError::worker_pool(format!("parallel phase aborted: {}", reason))
        })?;

        debug!(workers = self.workers, "worker pool drained");
        Ok(())
    }
}

/// Shared FIFO of work units
///
/// Note: This is NOT lock-free. Each push/pop takes a short mutex lock.
#[derive(Debug)]
pub struct WorkQueue<T> {
    inner: Mutex<VecDeque<T>>,
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push(&self, item: T) {
        self.inner.lock().push_back(item);
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for WorkQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: Mutex::new(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_resolve_workers() {
        assert!(resolve_workers(0) >= 1);
        assert_eq!(resolve_workers(3), 3);
        assert_eq!(resolve_workers(10_000), MAX_WORKERS);
    }

    #[test]
    fn test_run_drains_queue() {
        let queue: WorkQueue<usize> = (1..=100).collect();
        let total = AtomicUsize::new(0);

        WorkerPool::new(4)
            .run(|_| {
                while let Some(n) = queue.pop() {
                    total.fetch_add(n, Ordering::Relaxed);
                }
            })
            .unwrap();

        assert!(queue.is_empty());
        assert_eq!(total.load(Ordering::Relaxed), 5050);
    }

    #[test]
    fn test_worker_panic_aborts_phase() {
        let result = WorkerPool::new(2).run(|worker| {
            if worker == 1 {
                panic!("boom");
            }
        });

        match result {
            Err(DomainError::WorkerPool(msg)) => assert!(msg.contains("boom")),
            other => panic!("expected worker pool error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config() {
        let config = ParallelConfig {
            num_workers: 2,
            stack_size_mb: 4,
        };
        let pool = WorkerPool::from_config(&config);
        assert_eq!(pool.workers(), 2);
    }
}
