//! Discovery configuration
//!
//! Main configuration struct with preset-based defaults and override support.

use super::{
    error::{ConfigError, ConfigResult},
    io::{ConfigExportV1, ConfigOverrides, SCHEMA_VERSION},
    preset::Preset,
    stage_configs::*,
    validation::{CrossStageValidator, ValidatableCollection},
};
use tracing::{debug, warn};

/// Discovery configuration: a preset plus optional per-stage overrides
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub(crate) preset: Preset,
    pub(crate) similarity: Option<SimilarityConfig>,
    pub(crate) parallel: Option<ParallelConfig>,
    pub(crate) max_drop: Option<MaxDropConfig>,
    pub(crate) trimmer: Option<TrimmerConfig>,
}

impl DiscoveryConfig {
    /// Level 1: Create from preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            similarity: None,
            parallel: None,
            max_drop: None,
            trimmer: None,
        }
    }

    /// Level 2: Override similarity stage
    pub fn similarity<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SimilarityConfig) -> SimilarityConfig,
    {
        let base = self
            .similarity
            .take()
            .unwrap_or_else(|| SimilarityConfig::from_preset(self.preset));
        self.similarity = Some(f(base));
        self
    }

    /// Level 2: Override parallelism
    pub fn parallel<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ParallelConfig) -> ParallelConfig,
    {
        let base = self
            .parallel
            .take()
            .unwrap_or_else(|| ParallelConfig::from_preset(self.preset));
        self.parallel = Some(f(base));
        self
    }

    /// Level 2: Override max-drop policy
    pub fn max_drop<F>(mut self, f: F) -> Self
    where
        F: FnOnce(MaxDropConfig) -> MaxDropConfig,
    {
        let base = self
            .max_drop
            .take()
            .unwrap_or_else(|| MaxDropConfig::from_preset(self.preset));
        self.max_drop = Some(f(base));
        self
    }

    /// Level 2: Override trimmer selection
    pub fn trimmer<F>(mut self, f: F) -> Self
    where
        F: FnOnce(TrimmerConfig) -> TrimmerConfig,
    {
        let base = self
            .trimmer
            .take()
            .unwrap_or_else(|| TrimmerConfig::from_preset(self.preset));
        self.trimmer = Some(f(base));
        self
    }

    /// Get the base preset
    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    pub(crate) fn has_max_drop_override(&self) -> bool {
        self.max_drop.is_some()
    }

    pub(crate) fn effective_similarity(&self) -> SimilarityConfig {
        self.similarity
            .clone()
            .unwrap_or_else(|| SimilarityConfig::from_preset(self.preset))
    }

    pub(crate) fn effective_parallel(&self) -> ParallelConfig {
        self.parallel
            .clone()
            .unwrap_or_else(|| ParallelConfig::from_preset(self.preset))
    }

    pub(crate) fn effective_max_drop(&self) -> MaxDropConfig {
        self.max_drop
            .clone()
            .unwrap_or_else(|| MaxDropConfig::from_preset(self.preset))
    }

    pub(crate) fn effective_trimmer(&self) -> TrimmerConfig {
        self.trimmer
            .clone()
            .unwrap_or_else(|| TrimmerConfig::from_preset(self.preset))
    }

    /// Build and validate
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        // Step 1: Validate individual stage configs
        self.similarity.validate_all()?;
        self.parallel.validate_all()?;
        self.max_drop.validate_all()?;
        self.trimmer.validate_all()?;

        // Step 2: Cross-stage findings (non-fatal)
        for warning in CrossStageValidator::warnings(&self) {
            warn!(preset = %self.preset, "{}", warning);
        }

        debug!(config = %self.describe(), "configuration validated");
        Ok(ValidatedConfig(self))
    }

    /// Load from a YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(SCHEMA_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![SCHEMA_VERSION],
                })
            }
        }

        let mut config = Self::preset(Preset::parse(&export.preset)?);

        if let Some(overrides) = export.overrides {
            config.similarity = overrides.similarity;
            config.parallel = overrides.parallel;
            config.max_drop = overrides.max_drop;
            config.trimmer = overrides.trimmer;
        }

        config.build()
    }

    /// Export to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let overrides = ConfigOverrides {
            similarity: self.similarity.clone(),
            parallel: self.parallel.clone(),
            max_drop: self.max_drop.clone(),
            trimmer: self.trimmer.clone(),
        };

        let export = ConfigExportV1 {
            version: Some(SCHEMA_VERSION),
            preset: self.preset.to_string(),
            overrides: (!overrides.is_empty()).then_some(overrides),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Get a human-readable description of the configuration
    pub fn describe(&self) -> String {
        let similarity = self.effective_similarity();
        let trimmer = self.effective_trimmer();
        let max_drop = self.effective_max_drop();
        format!(
            "{} [similarity {} on {:?}, trimmer {}, max-drop {}{}{}, workers {}]",
            self.preset,
            similarity.threshold,
            similarity.source,
            trimmer.policy,
            max_drop.gap_threshold,
            if max_drop.full_signature_constraint { " +full" } else { "" },
            if max_drop.ignore_last_drop { " +ignore-last" } else { "" },
            self.effective_parallel().num_workers,
        )
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

/// Validated configuration (immutable, safe to use)
#[derive(Debug, Clone)]
pub struct ValidatedConfig(DiscoveryConfig);

impl ValidatedConfig {
    /// Unwrap the validated config to get the inner DiscoveryConfig
    pub fn into_inner(self) -> DiscoveryConfig {
        self.0
    }

    /// Get a reference to the inner DiscoveryConfig
    pub fn as_inner(&self) -> &DiscoveryConfig {
        &self.0
    }

    pub fn preset(&self) -> Preset {
        self.0.preset
    }

    /// Effective similarity config (override or preset)
    pub fn similarity(&self) -> SimilarityConfig {
        self.0.effective_similarity()
    }

    /// Effective parallel config (override or preset)
    pub fn parallel(&self) -> ParallelConfig {
        self.0.effective_parallel()
    }

    /// Effective max-drop config (override or preset)
    pub fn max_drop(&self) -> MaxDropConfig {
        self.0.effective_max_drop()
    }

    /// Effective trimmer config (override or preset)
    pub fn trimmer(&self) -> TrimmerConfig {
        self.0.effective_trimmer()
    }

    pub fn describe(&self) -> String {
        self.0.describe()
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.0.to_yaml()
    }
}
