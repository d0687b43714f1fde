//! Error types shared across the workspace

use thiserror::Error;

/// Core errors
#[derive(Debug, Error)]
pub enum Error {
    /// Field name did not match any known form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Transcript capture failed at the ASR boundary
    #[error("Transcript capture failed: {0}")]
    Capture(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
