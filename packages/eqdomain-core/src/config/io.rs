//! Configuration I/O (YAML schema)
//!
//! Defines YAML schema types. Loading and export live in pipeline_config.rs.

use super::stage_configs::*;
use serde::{Deserialize, Serialize};

/// Current schema version
pub const SCHEMA_VERSION: u32 = 1;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<SimilarityConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_drop: Option<MaxDropConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trimmer: Option<TrimmerConfig>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.similarity.is_none()
            && self.parallel.is_none()
            && self.max_drop.is_none()
            && self.trimmer.is_none()
    }
}
