//! Unified error types for AI Studio Core.

use aistudio_types::ConfigError;
use thiserror::Error;

/// Errors raised while bootstrapping the process (settings, logging).
///
/// Request handling itself has no error path for thinking hints.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Settings could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for AI Studio Core operations.
pub type AppResult<T> = Result<T, AppError>;
