//! Trimmer policy identifiers
//!
//! Policies are selected by a case-insensitive identifier, optionally with an
//! argument after a colon:
//!
//! | Identifier                  | Policy                                   |
//! |-----------------------------|------------------------------------------|
//! | `CONSERVATIVE`              | first block only                         |
//! | `LIBERAL`                   | up to the block with the largest term sum|
//! | `CENTRIST[:<threshold>]`    | max-drop over precision scores           |
//! | `NONE`, `NON-TRIMMING`      | identity                                 |
//! | `COLUMN-SUPPORT[:<min>]`    | prefix with common-column support        |
//!
//! The centrist threshold replaces the max-drop gap threshold.

use crate::config::{ConfigError, ConfigResult, Threshold};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of trimming strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TrimmerPolicy {
    Conservative,
    Liberal,
    Centrist { threshold: Option<Threshold> },
    NonTrimming,
    ColumnSupport { min_blocks: usize },
}

impl Default for TrimmerPolicy {
    fn default() -> Self {
        TrimmerPolicy::Centrist { threshold: None }
    }
}

impl TrimmerPolicy {
    /// Parse a policy identifier
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let unknown = || ConfigError::UnknownTrimmerPolicy(text.to_string());
        let normalized = text.trim().to_ascii_uppercase().replace('_', "-");
        let (name, argument) = match normalized.split_once(':') {
            Some((name, argument)) => (name, Some(argument.trim())),
            None => (normalized.as_str(), None),
        };

        match (name.trim(), argument) {
            ("CONSERVATIVE", None) => Ok(TrimmerPolicy::Conservative),
            ("LIBERAL", None) => Ok(TrimmerPolicy::Liberal),
            ("NONE" | "NON-TRIMMING", None) => Ok(TrimmerPolicy::NonTrimming),
            ("CENTRIST", None) => Ok(TrimmerPolicy::Centrist { threshold: None }),
            ("CENTRIST", Some(threshold)) => Ok(TrimmerPolicy::Centrist {
                threshold: Some(Threshold::parse(threshold)?),
            }),
            ("COLUMN-SUPPORT", None) => Ok(TrimmerPolicy::ColumnSupport { min_blocks: 1 }),
            ("COLUMN-SUPPORT", Some(min)) => min
                .parse::<usize>()
                .map(|min_blocks| TrimmerPolicy::ColumnSupport { min_blocks })
                .map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }

    /// Whether the policy consults the max-drop pruner
    pub fn uses_max_drop(&self) -> bool {
        matches!(self, TrimmerPolicy::Centrist { .. })
    }

    /// Embedded gap threshold, if any
    pub fn embedded_threshold(&self) -> Option<Threshold> {
        match self {
            TrimmerPolicy::Centrist { threshold } => *threshold,
            _ => None,
        }
    }
}

impl fmt::Display for TrimmerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimmerPolicy::Conservative => write!(f, "CONSERVATIVE"),
            TrimmerPolicy::Liberal => write!(f, "LIBERAL"),
            TrimmerPolicy::Centrist { threshold: None } => write!(f, "CENTRIST"),
            TrimmerPolicy::Centrist {
                threshold: Some(threshold),
            } => write!(f, "CENTRIST:{}", threshold),
            TrimmerPolicy::NonTrimming => write!(f, "NON-TRIMMING"),
            TrimmerPolicy::ColumnSupport { min_blocks } => {
                write!(f, "COLUMN-SUPPORT:{}", min_blocks)
            }
        }
    }
}

impl std::str::FromStr for TrimmerPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TrimmerPolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> ConfigResult<Self> {
        Self::parse(&value)
    }
}

impl From<TrimmerPolicy> for String {
    fn from(policy: TrimmerPolicy) -> Self {
        policy.to_string()
    }
}
