//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// Provider and transport failures are normally folded into a failed
/// [`ToolOutput`](crate::ToolOutput) by the tool itself; these errors reach
/// the caller only for dispatch and argument problems.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Provider URL could not be built.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// General execution error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Brain processing error.
    #[error("Brain error: {0}")]
    BrainError(#[from] brain_core::BrainError),
}
