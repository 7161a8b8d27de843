//! Configuration System
//!
//! Three levels of control:
//! - Level 1: Preset - one-liner defaults
//! - Level 2: Stage Override - closure adjustments on top of a preset
//! - Level 3: YAML - complete control, versioned schema
//!
//! # Examples
//!
//! ```rust,ignore
//! use eqdomain_core::config::{DiscoveryConfig, Preset, Threshold};
//!
//! // Level 1: Simple preset
//! let config = DiscoveryConfig::preset(Preset::Strict).build()?;
//!
//! // Level 2: Override specific stage
//! let config = DiscoveryConfig::preset(Preset::Balanced)
//!     .similarity(|c| c.threshold(Threshold::parse("GT0.3")?))
//!     .parallel(|c| c.num_workers(8))
//!     .build()?;
//!
//! // Level 3: YAML
//! let config = DiscoveryConfig::from_yaml("discovery.yaml")?;
//! ```
//!
//! Unrecognized threshold or trimmer identifiers fail at load/build time,
//! before any phase starts.

pub mod error;
pub mod io;
pub mod pipeline_config;
pub mod preset;
pub mod stage_configs;
pub mod threshold;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use pipeline_config::{DiscoveryConfig, ValidatedConfig};
pub use preset::Preset;
pub use stage_configs::{MaxDropConfig, ParallelConfig, SimilarityConfig, TrimmerConfig};
pub use threshold::{Comparison, Threshold};
pub use validation::{CrossStageValidator, Validatable, ValidatableCollection};
