//! Echo brain implementation - answers with the prompt itself.

use async_trait::async_trait;
use brain_core::{Brain, BrainError, Completion, CompletionRequest};

/// A brain that replies with the prompt it received, as text.
///
/// Never returns tool calls, so routing through it always takes the
/// general-answer path.
#[derive(Debug, Clone, Default)]
pub struct EchoBrain {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoBrain {
    /// Create a new EchoBrain with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoBrain with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::EchoBrain;
    ///
    /// let brain = EchoBrain::with_prefix("Echo: ");
    /// // Will respond with "Echo: <prompt>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Brain for EchoBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        let text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, request.prompt),
            None => request.prompt,
        };
        Ok(Completion::text(text))
    }

    fn name(&self) -> &str {
        "EchoBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let brain = EchoBrain::new();
        let reply = brain.complete(CompletionRequest::new("Hello!")).await.unwrap();
        assert_eq!(reply.text_or_empty(), "Hello!");
        assert!(reply.tool_calls.is_empty());
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let brain = EchoBrain::with_prefix("Echo: ");
        let reply = brain.complete(CompletionRequest::new("Hello!")).await.unwrap();
        assert_eq!(reply.text_or_empty(), "Echo: Hello!");
    }
}
