//! Report error types.

use thiserror::Error;

/// Errors that can occur during report rendering.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The CSV writer rejected a record.
    #[error("failed to write report row: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not be flushed into its buffer.
    #[error("failed to finish report: {0}")]
    Flush(String),

    /// Rendered bytes are not UTF-8.
    #[error("report is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
