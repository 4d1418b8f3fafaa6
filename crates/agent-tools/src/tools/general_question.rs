//! General knowledge tool that answers directly from the language model.

use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use brain_core::{Brain, CompletionRequest, ParamType, ToolDefinition};
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Default model for free-text answers.
pub const DEFAULT_ANSWER_MODEL: &str = "gemini-2.0-flash";

/// Sampling settings for general answers.
#[derive(Debug, Clone)]
pub struct GeneralQuestionConfig {
    /// Model override; `None` uses the brain's own default.
    pub model: Option<String>,
    /// Sampling temperature, kept low for stable answers.
    pub temperature: f32,
}

impl Default for GeneralQuestionConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.3,
        }
    }
}

impl GeneralQuestionConfig {
    /// Load the answer model from `GEMINI_ANSWER_MODEL`.
    pub fn from_env() -> Self {
        let model = env::var("GEMINI_ANSWER_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ANSWER_MODEL.to_string());

        Self {
            model: Some(model),
            ..Default::default()
        }
    }
}

/// Answers anything the other tools don't cover by passing the question
/// verbatim to the brain.
pub struct GeneralQuestion {
    brain: Arc<dyn Brain>,
    config: GeneralQuestionConfig,
}

impl GeneralQuestion {
    /// Create a new general question tool backed by `brain`.
    pub fn new(brain: Arc<dyn Brain>, config: GeneralQuestionConfig) -> Self {
        Self { brain, config }
    }

    /// Ask the brain directly. Also used by the router for fallbacks.
    pub async fn answer(&self, question: &str) -> ToolOutput {
        let mut request =
            CompletionRequest::new(question).with_temperature(self.config.temperature);
        if let Some(model) = &self.config.model {
            request = request.with_model(model.clone());
        }

        debug!("Answering general question via {}", self.brain.name());

        match self.brain.complete(request).await {
            Ok(completion) => match completion.text {
                Some(text) if !text.trim().is_empty() => ToolOutput::success(text),
                _ => {
                    warn!("Model returned an empty answer");
                    ToolOutput::failure("❌ Error answering question: model returned no text")
                }
            },
            Err(e) => {
                warn!("General question failed: {}", e);
                ToolOutput::failure(format!("❌ Error answering question: {}", e))
            }
        }
    }
}

#[async_trait]
impl Tool for GeneralQuestion {
    fn name(&self) -> &str {
        "general_question"
    }

    fn description(&self) -> &str {
        "Answer a general knowledge question that is not about weather or currency conversion."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description()).param(
            "question",
            ParamType::String,
            "The user's question",
        )
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let question = args.get_string("question")?;
        Ok(self.answer(&question).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::args;
    use brain_core::Completion;
    use mock_brain::{EchoBrain, FailingBrain, ScriptedBrain};
    use serde_json::json;

    #[tokio::test]
    async fn test_question_passed_verbatim() {
        let brain = Arc::new(ScriptedBrain::new(vec![Completion::text("Paris.")]));
        let tool = GeneralQuestion::new(
            brain.clone(),
            GeneralQuestionConfig {
                model: Some("answer-model".to_string()),
                ..Default::default()
            },
        );

        let output = tool
            .execute(args(json!({"question": "whats the capital of france"})))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.content, "Paris.");

        let requests = brain.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "whats the capital of france");
        assert_eq!(requests[0].temperature, Some(0.3));
        assert_eq!(requests[0].model.as_deref(), Some("answer-model"));
        assert!(requests[0].tools.is_empty());
    }

    #[tokio::test]
    async fn test_echo_answer() {
        let tool = GeneralQuestion::new(Arc::new(EchoBrain::new()), GeneralQuestionConfig::default());
        let output = tool.answer("Who wrote Hamlet?").await;
        assert_eq!(output.content, "Who wrote Hamlet?");
    }

    #[tokio::test]
    async fn test_brain_failure_becomes_answer() {
        let tool = GeneralQuestion::new(
            Arc::new(FailingBrain::new("quota exceeded")),
            GeneralQuestionConfig::default(),
        );
        let output = tool.answer("Who wrote Hamlet?").await;
        assert!(!output.success);
        assert_eq!(
            output.content,
            "❌ Error answering question: network error: quota exceeded"
        );
    }

    #[tokio::test]
    async fn test_empty_reply_is_an_error() {
        let tool = GeneralQuestion::new(
            Arc::new(ScriptedBrain::new(vec![Completion::default()])),
            GeneralQuestionConfig::default(),
        );
        let output = tool.answer("hello?").await;
        assert!(!output.success);
        assert!(output.content.starts_with("❌ Error answering question: "));
    }

    #[tokio::test]
    async fn test_missing_question() {
        let tool = GeneralQuestion::new(Arc::new(EchoBrain::new()), GeneralQuestionConfig::default());
        let result = tool.execute(ToolArgs::default()).await;
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }
}
