//! Error types for the fafnir file identifier.
//!
//! Only startup concerns are fatal: loading the signature database and
//! validating the command line. Everything inside the detection pipeline
//! degrades to a conservative classification instead of returning an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fafnir operations.
#[derive(Debug, Error)]
pub enum FafnirError {
    /// Signature definition source missing or malformed
    #[error("Configuration error in {source_name}: {message}")]
    Config {
        source_name: String,
        message: String,
    },

    /// Wrong command-line usage
    #[error("Usage error: {0}")]
    Usage(String),

    /// Target path is not an existing regular file
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File I/O errors outside the detection pipeline
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FafnirError {
    /// Build a configuration error tied to a named definition source.
    pub fn config(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        FafnirError::Config {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            FafnirError::Usage(_) | FafnirError::NotFound(_) => 1,
            FafnirError::Config { .. } => 2,
            FafnirError::Io(_) | FafnirError::Serialization(_) => 3,
        }
    }
}

impl From<serde_json::Error> for FafnirError {
    fn from(err: serde_json::Error) -> Self {
        FafnirError::Serialization(err.to_string())
    }
}

/// Result type alias for fafnir operations
pub type Result<T> = std::result::Result<T, FafnirError>;
