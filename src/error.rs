//! Transcript Similarity Error Types
//!
//! Centralized error handling for the comparison pipeline.

use thiserror::Error;

/// Central error type for transcript similarity
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Usage error: {0}")]
    Usage(String),

    /// Raised by a cosine backend that cannot score a pair.
    /// Absorbed by the calculator, which falls back to term frequency.
    #[error("Cosine backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for similarity operations
pub type SimResult<T> = Result<T, SimError>;
