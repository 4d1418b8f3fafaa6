//! Error types for brain operations.

use thiserror::Error;

/// Errors that can occur while talking to a language model.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The brain could not be set up (bad URL, HTTP client failure, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response could not be interpreted.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
