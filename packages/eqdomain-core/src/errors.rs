//! Error types for eqdomain-core
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for eqdomain-core operations
#[derive(Debug, Error)]
pub enum DomainError {
    /// Immutable id set built from data containing the same value twice
    #[error("Duplicate element {0} in immutable id set")]
    DuplicateElement(u32),

    /// Immutable id set built from data that is not in ascending order
    #[error("Unsorted input for immutable id set: {previous} followed by {next}")]
    UnsortedInput { previous: u32, next: u32 },

    /// Lookup of a node/object id that is not part of the universe
    #[error("Unknown node id {0}")]
    UnknownNode(u32),

    /// Lookup of a column id that no node occurs in
    #[error("Unknown column id {0}")]
    UnknownColumn(u32),

    /// Trimmer needs a context that was not supplied
    #[error("Missing trimming context: {0}")]
    MissingContext(String),

    /// Worker pool could not be built or was interrupted
    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    /// Malformed input record
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DomainError {
    /// Create a worker pool error
    pub fn worker_pool(msg: impl Into<String>) -> Self {
        DomainError::WorkerPool(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }
}

/// Result type alias for eqdomain operations
pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::DuplicateElement(7).to_string(),
            "Duplicate element 7 in immutable id set"
        );
        assert!(DomainError::UnknownNode(42).to_string().contains("42"));

        let err = DomainError::UnsortedInput {
            previous: 9,
            next: 3,
        };
        assert!(err.to_string().contains("9 followed by 3"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: DomainError = ConfigError::UnknownTrimmerPolicy("FOO".to_string()).into();
        assert!(matches!(err, DomainError::Config(_)));
        assert!(err.to_string().contains("FOO"));
    }
}
