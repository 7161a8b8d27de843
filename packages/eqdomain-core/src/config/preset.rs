//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// High-precision discovery
    ///
    /// - Similarity: GT0.5
    /// - Trimmer: CONSERVATIVE (first block only)
    Strict,

    /// Default discovery
    ///
    /// - Similarity: GEQ0.25
    /// - Trimmer: CENTRIST (precision + max-drop)
    #[default]
    Balanced,

    /// High-recall discovery
    ///
    /// - Similarity: GT0.1
    /// - Trimmer: LIBERAL (up to the heaviest block)
    Lenient,
}

impl Preset {
    /// Parse preset from string
    pub fn parse(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "balanced" => Ok(Self::Balanced),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Balanced => "balanced",
            Self::Lenient => "lenient",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::parse("strict").unwrap(), Preset::Strict);
        assert_eq!(Preset::parse("BALANCED").unwrap(), Preset::Balanced);
        assert_eq!(" lenient ".parse::<Preset>().unwrap(), Preset::Lenient);
        assert!(matches!(
            Preset::parse("thorough"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Strict.to_string(), "strict");
        assert_eq!(Preset::Balanced.to_string(), "balanced");
        assert_eq!(Preset::Lenient.to_string(), "lenient");
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Balanced);
    }
}
