//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Document serialization failed.
    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export format name not recognized.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),
}
