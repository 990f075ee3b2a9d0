//! Error types for style parsing.

use thiserror::Error;

/// Error type for style parsing and validation.
#[derive(Debug, Error)]
pub enum StyleError {
    /// YAML syntax error, unknown field, or unparsable color
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Invalid value for a field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field path
        field: String,
        /// Error message
        message: String,
    },
}

impl StyleError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
