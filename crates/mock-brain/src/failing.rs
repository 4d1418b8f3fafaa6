//! Failing brain implementation - every call errors.

use async_trait::async_trait;
use brain_core::{Brain, BrainError, Completion, CompletionRequest};

/// A brain whose every call fails with a network error carrying `message`.
#[derive(Debug, Clone)]
pub struct FailingBrain {
    message: String,
}

impl FailingBrain {
    /// Create a brain that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingBrain {
    fn default() -> Self {
        Self::new("model unreachable")
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, BrainError> {
        Err(BrainError::Network(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }
}
