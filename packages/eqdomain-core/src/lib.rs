/*
 * eqdomain-core - Equivalence-Class Domain Discovery Core
 *
 * Feature-First Architecture:
 * - shared/      : Equivalence classes, node/column indexes, fractions, worker pool
 * - features/    : Vertical slices (id_set → graph → components → similarity,
 *                  prune → signature)
 * - config/      : Presets, stage configs, YAML I/O
 *
 * Parallelism:
 * - Named Rayon pools per phase, shared work queues
 * - Concurrent edge and signature sinks
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::len_without_is_empty)] // Size accessors on graph types
#![allow(clippy::unnecessary_map_or)] // map_or style for compatibility

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (set algebra up to signature trimming)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{DiscoveryConfig, Preset, Threshold, ValidatedConfig};
pub use errors::{DomainError, Result};
pub use features::components::{
    strongly_connected_components, ComponentSet, DirectedConnectedComponents,
    MaximalCliqueFinder, UndirectedConnectedComponents,
};
pub use features::graph::{
    ConcurrentGraphBuilder, DenseGraph, EdgeCollector, EdgeSink, Graph, SparseGraph,
};
pub use features::id_set::{HashIdSet, IdSet, ImmutableIdSet};
pub use features::prune::{CandidateSetFinder, MaxDropFinder, ThresholdFinder};
pub use features::signature::{
    Signature, SignatureBlock, SignatureTrimRunner, TrimContext, TrimmerFactory, TrimmerPolicy,
};
pub use features::similarity::{ElementSource, SimilarityGraphBuilder, SimilarityNode};
pub use shared::models::{ColumnIndex, EquivalenceClass, Fraction, NodeIndex};
