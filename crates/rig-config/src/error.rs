//! Error types for configuration generation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while validating a request or generating a document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A request field violates one of its invariants. Carries the field
    /// name and the constraint it failed so callers can report both.
    #[error("invalid configuration: {field}: {constraint}")]
    InvalidConfiguration { field: String, constraint: String },

    /// The process environment could not be captured into a snapshot.
    #[error("failed to capture environment overrides: {0}")]
    Environment(#[from] figment::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, constraint: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.to_string(),
            constraint: constraint.into(),
        }
    }
}
