//! Configuration validation
//!
//! Stage configs implement [`Validatable`]; [`DiscoveryConfig::build`] runs
//! every stage check and then the cross-stage checks below.
//!
//! [`DiscoveryConfig::build`]: super::DiscoveryConfig::build

use super::error::ConfigResult;
use super::pipeline_config::DiscoveryConfig;
use crate::features::signature::TrimmerPolicy;

// ═══════════════════════════════════════════════════════════════════════════
// Validatable Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use eqdomain_core::config::Validatable;
///
/// fn start_phase<C: Validatable>(config: &C) -> Result<(), ConfigError> {
///     config.validate()?;
///     // ... run phase
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Extension trait for validating collections of configs
pub trait ValidatableCollection {
    /// Validate all configs in collection
    fn validate_all(&self) -> ConfigResult<()>;
}

impl<T: Validatable> ValidatableCollection for Vec<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        for config in self {
            config.validate()?;
        }
        Ok(())
    }
}

impl<T: Validatable> ValidatableCollection for Option<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        if let Some(config) = self {
            config.validate()?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Cross-Stage Checks
// ═══════════════════════════════════════════════════════════════════════════

/// Cross-stage validator
///
/// Findings here never reject a configuration; they are reported as
/// warnings when the configuration is built.
pub struct CrossStageValidator;

impl CrossStageValidator {
    /// Collect non-fatal cross-stage findings
    pub fn warnings(config: &DiscoveryConfig) -> Vec<String> {
        let mut warnings = Vec::new();
        let trimmer = config.effective_trimmer();
        let max_drop = config.effective_max_drop();

        if let TrimmerPolicy::Centrist {
            threshold: Some(embedded),
        } = &trimmer.policy
        {
            if config.has_max_drop_override() && *embedded != max_drop.gap_threshold {
                warnings.push(format!(
                    "trimmer policy embeds gap threshold {} which replaces max_drop.gap_threshold {}",
                    embedded, max_drop.gap_threshold
                ));
            }
        }

        if !trimmer.policy.uses_max_drop() && config.has_max_drop_override() {
            warnings.push(format!(
                "max_drop overrides have no effect with trimmer policy {}",
                trimmer.policy
            ));
        }

        warnings
    }
}
