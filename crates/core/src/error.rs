//! Error types for the promptsync CLI.
//!
//! A single error enum covers every failure category of a sync run:
//! configuration, I/O while rewriting the target, prompt loading, block
//! splicing and JSON output.

use thiserror::Error;

/// Unified error type for the promptsync CLI.
///
/// All fallible functions return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration and path resolution errors
    #[error("{0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Prompt loading errors
    #[error("{0}")]
    Prompt(String),

    /// Target file splicing errors
    #[error("{0}")]
    Splice(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
