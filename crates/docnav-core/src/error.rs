// Rust guideline compliant 2026-02-06

//! Error types for the docnav core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docnav operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for docnav operations.
///
/// A documentation file referenced by the index but absent on disk is not an
/// error; the pipeline reports it as [`crate::FileStatus::Missing`].
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The index document could not be read.
    #[error("Cannot read index document {}: {source}", .path.display())]
    Index {
        /// Path of the index document.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The link pattern could not be compiled.
    #[error("Invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),
}
