//! Error types for orchestrator operations.

use brain_core::BrainError;
use thiserror::Error;

/// Errors that can occur while routing a question.
///
/// Tool failures never appear here; they are already folded into the
/// answer text by the tool.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The classification call to the brain failed.
    #[error("classification failed: {0}")]
    Classification(#[from] BrainError),
}
