//! Store error types.

use std::path::PathBuf;

use tally_core::report::ReportError;
use thiserror::Error;

/// Errors raised while reading or writing files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file or directory operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The user state could not be encoded.
    #[error("failed to encode {path}: {source}")]
    Json {
        /// Target file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// The report could not be rendered.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
