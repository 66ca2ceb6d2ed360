//! Error types for Postmetric operations.
//!
//! The analysis functions themselves never fail: any string produces a fully
//! populated report. [`PostmetricError`] covers the edges around them, such as
//! reading input, rendering reports, and validating configuration.
//!
//! # Example
//!
//! ```rust
//! use postmetric_core::{PostmetricError, Result};
//!
//! fn load(path: &str) -> Result<String> {
//!     if path.is_empty() {
//!         return Err(PostmetricError::FileNotFound(path.into()));
//!     }
//!     // ... read the file
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Postmetric operations.
#[derive(Error, Debug)]
pub enum PostmetricError {
    /// File not found.
    ///
    /// Returned when attempting to read content from a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Input read errors.
    ///
    /// Wraps I/O errors raised while reading a file or standard input.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),

    /// Report serialization errors.
    ///
    /// Returned when a report cannot be rendered into the requested format.
    #[error("Failed to serialize report: {0}")]
    SerializeError(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for PostmetricError {
    fn from(err: serde_json::Error) -> Self {
        PostmetricError::SerializeError(err.to_string())
    }
}

/// Result type alias for PostmetricError.
///
/// This is a convenience alias for `std::result::Result<T, PostmetricError>`.
pub type Result<T> = std::result::Result<T, PostmetricError>;
