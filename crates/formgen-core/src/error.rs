//! Error types for the form generator
//!
//! All fallible operations return `Result<T, Error>`.
//! Every failure is final for the call that raised it; nothing is retried.

use thiserror::Error;

/// Form generator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Empty or whitespace-only phrase or token
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The linguistic model (lexicon) could not be loaded
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Output record could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type alias for form generator operations
pub type Result<T> = std::result::Result<T, Error>;
