//! Configuration-related errors.
//!
//! The directive normalizer never fails, so configuration loading is the only
//! fallible surface in the workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config file not found at expected path
    #[error("Config not found: {path}")]
    NotFound {
        /// Filesystem path where config was expected
        path: String,
    },

    /// Config file exists but could not be read
    #[error("Config read error at {path}: {message}")]
    ReadError {
        /// Filesystem path that failed to read
        path: String,
        /// Underlying IO failure
        message: String,
    },

    /// Config file parse error
    #[error("Config parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Config validation error (invalid values)
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field or environment variable that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Create a read error from an IO error, mapping missing files to `NotFound`.
    pub fn from_io_error(path: impl Into<String>, e: &std::io::Error) -> Self {
        let path = path.into();
        if e.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::ReadError { path, message: e.to_string() }
        }
    }

    /// Create a validation error for a named field or environment variable.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError { field: field.into(), message: message.into() }
    }
}

/// Standard Result type using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
