//! Error types for the ask endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::OrchestratorError;
use thiserror::Error;

/// Errors that can occur while serving a question.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `text` field was blank.
    #[error("Question text must not be empty")]
    EmptyQuestion,

    /// Routing failed before any tool ran.
    #[error("Routing error: {0}")]
    Orchestrator(#[from] OrchestratorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::EmptyQuestion => {
                tracing::debug!("Rejected empty question");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Orchestrator(err) => {
                tracing::error!("Routing error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for ask handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
