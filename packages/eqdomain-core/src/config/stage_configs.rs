//! Stage-specific configuration types
//!
//! Each discovery stage has its own configuration struct with validation.
//! Builder setters return `Self` so overrides compose inside the closures
//! accepted by [`DiscoveryConfig`](super::DiscoveryConfig).

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::threshold::Threshold;
use super::validation::Validatable;
use crate::features::signature::TrimmerPolicy;
use crate::features::similarity::ElementSource;
use crate::shared::models::Fraction;
use crate::shared::worker_pool::MAX_WORKERS;
use serde::{Deserialize, Serialize};

/// Thresholds are compared against values in `[0, 1]`
fn validate_unit_threshold(field: &str, threshold: &Threshold, hint: &str) -> ConfigResult<()> {
    if threshold.value() > Fraction::ONE {
        return Err(ConfigError::range_with_hint(
            field,
            threshold,
            "0",
            "1",
            hint,
        ));
    }
    Ok(())
}

// ============================================================================
// Similarity Graph Configuration
// ============================================================================

/// All-pairs similarity graph construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimilarityConfig {
    /// Edge predicate over the Jaccard index (value in 0..=1)
    pub threshold: Threshold,

    /// Which element array of an equivalence class is compared
    #[serde(default)]
    pub source: ElementSource,
}

impl SimilarityConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        validate_unit_threshold(
            "similarity.threshold",
            &self.threshold,
            "Jaccard similarity never exceeds 1",
        )
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        let threshold = match preset {
            Preset::Strict => Threshold::greater_than(Fraction::new(5, 10)),
            Preset::Balanced => Threshold::at_least(Fraction::new(25, 100)),
            Preset::Lenient => Threshold::greater_than(Fraction::new(1, 10)),
        };
        Self {
            threshold,
            source: ElementSource::default(),
        }
    }

    /// Builder: Set threshold
    pub fn threshold(mut self, v: Threshold) -> Self {
        self.threshold = v;
        self
    }

    /// Builder: Set element source
    pub fn source(mut self, v: ElementSource) -> Self {
        self.source = v;
        self
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for SimilarityConfig {
    fn validate(&self) -> ConfigResult<()> {
        SimilarityConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "SimilarityConfig"
    }
}

// ============================================================================
// Parallelism Configuration
// ============================================================================

/// Parallelism Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Number of workers (0=auto, 1..=256)
    pub num_workers: usize,

    /// Thread stack size in MB (1..=64)
    pub stack_size_mb: usize,
}

impl ParallelConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > MAX_WORKERS {
            return Err(ConfigError::range_with_hint(
                "num_workers",
                self.num_workers,
                0,
                MAX_WORKERS,
                "Number of workers must be reasonable (0=auto)",
            ));
        }

        if self.stack_size_mb < 1 || self.stack_size_mb > 64 {
            return Err(ConfigError::range_with_hint(
                "stack_size_mb",
                self.stack_size_mb,
                1,
                64,
                "Stack size must be reasonable",
            ));
        }

        Ok(())
    }

    /// Get preset configuration
    pub fn from_preset(_preset: Preset) -> Self {
        Self {
            num_workers: 0, // Auto
            stack_size_mb: 8,
        }
    }

    /// Builder: Set num_workers
    pub fn num_workers(mut self, v: usize) -> Self {
        self.num_workers = v;
        self
    }

    /// Builder: Set stack_size_mb
    pub fn stack_size_mb(mut self, v: usize) -> Self {
        self.stack_size_mb = v;
        self
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        ParallelConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "ParallelConfig"
    }
}

// ============================================================================
// Max-Drop Configuration
// ============================================================================

/// Max-drop pruning policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaxDropConfig {
    /// Predicate a score gap must satisfy to be a cut candidate
    pub gap_threshold: Threshold,

    /// Keep everything when best-minus-worst is below the worst score
    pub full_signature_constraint: bool,

    /// Never cut at the final gap (last score down to zero)
    pub ignore_last_drop: bool,
}

impl MaxDropConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        validate_unit_threshold(
            "max_drop.gap_threshold",
            &self.gap_threshold,
            "Score gaps of normalized block scores lie in 0..=1",
        )
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self {
                gap_threshold: Threshold::greater_than(Fraction::new(1, 10)),
                full_signature_constraint: true,
                ignore_last_drop: true,
            },
            Preset::Balanced => Self {
                gap_threshold: Threshold::greater_than(Fraction::ZERO),
                full_signature_constraint: true,
                ignore_last_drop: false,
            },
            Preset::Lenient => Self {
                gap_threshold: Threshold::greater_than(Fraction::ZERO),
                full_signature_constraint: false,
                ignore_last_drop: false,
            },
        }
    }

    /// Builder: Set gap_threshold
    pub fn gap_threshold(mut self, v: Threshold) -> Self {
        self.gap_threshold = v;
        self
    }

    /// Builder: Set full_signature_constraint
    pub fn full_signature_constraint(mut self, v: bool) -> Self {
        self.full_signature_constraint = v;
        self
    }

    /// Builder: Set ignore_last_drop
    pub fn ignore_last_drop(mut self, v: bool) -> Self {
        self.ignore_last_drop = v;
        self
    }
}

impl Default for MaxDropConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for MaxDropConfig {
    fn validate(&self) -> ConfigResult<()> {
        MaxDropConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "MaxDropConfig"
    }
}

// ============================================================================
// Signature Trimmer Configuration
// ============================================================================

/// Signature trimming policy selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrimmerConfig {
    /// Policy identifier, e.g. `CENTRIST:GT0.25`
    pub policy: TrimmerPolicy,

    /// Drop signatures that trim down to zero blocks
    pub require_non_empty: bool,
}

impl TrimmerConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let TrimmerPolicy::Centrist {
            threshold: Some(threshold),
        } = &self.policy
        {
            validate_unit_threshold(
                "trimmer.policy",
                threshold,
                "Centrist gap threshold applies to precision scores in 0..=1",
            )?;
        }
        Ok(())
    }

    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        let policy = match preset {
            Preset::Strict => TrimmerPolicy::Conservative,
            Preset::Balanced => TrimmerPolicy::Centrist { threshold: None },
            Preset::Lenient => TrimmerPolicy::Liberal,
        };
        Self {
            policy,
            require_non_empty: true,
        }
    }

    /// Builder: Set policy
    pub fn policy(mut self, v: TrimmerPolicy) -> Self {
        self.policy = v;
        self
    }

    /// Builder: Set require_non_empty
    pub fn require_non_empty(mut self, v: bool) -> Self {
        self.require_non_empty = v;
        self
    }
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}

impl Validatable for TrimmerConfig {
    fn validate(&self) -> ConfigResult<()> {
        TrimmerConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "TrimmerConfig"
    }
}
