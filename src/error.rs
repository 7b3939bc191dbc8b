//! Error types for record extraction.
//!
//! This module provides the [`ExtractError`] type for all library operations
//! and the [`Result`] convenience type.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for all extraction operations.
///
/// Every variant except the local `SP`/`EP` page-number tolerance inside the
/// bibliographic extractor is fatal for the run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input does not follow the fixed layout (unknown code character,
    /// missing column, empty block).
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A numeric column could not be parsed.
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber {
        /// Name of the field being decoded.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },

    /// A `PY` line did not match `YYYY/MM/DD/`.
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    /// Failure while processing a specific input file.
    #[error("Failed to process {}: {source}", path.display())]
    Source {
        /// Input file that triggered the error.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<ExtractError>,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ExtractError {
    /// Attach the input path to an error.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        ExtractError::Source {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
