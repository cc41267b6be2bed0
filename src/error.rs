//! Error types for the release helpers
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the release helpers
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors compiling a caller-supplied substitution pattern
    #[error("Invalid substitution pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Content that cannot be represented in the requested encoding
    #[error("Encoding error: {message} ({path})")]
    Encoding { message: String, path: PathBuf },

    /// Byte counts past the last supported unit
    #[error("Size error: {octets} octets exceeds the supported unit range")]
    SizeRange { octets: u64 },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ReleaseError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new pattern error
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a new encoding error
    pub fn encoding<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::Encoding {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ReleaseError>;
