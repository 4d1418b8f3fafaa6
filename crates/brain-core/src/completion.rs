//! Completion request and response types.

use crate::tools::{ToolDefinition, ToolRequest};

/// A single prompt sent to a brain.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    /// The full prompt text, sent as one user turn.
    pub prompt: String,
    /// Sampling temperature. `None` leaves the provider default.
    pub temperature: Option<f32>,
    /// Model to use instead of the brain's configured default.
    pub model: Option<String>,
    /// Tools the model may select. Empty means plain text completion.
    pub tools: Vec<ToolDefinition>,
}

impl CompletionRequest {
    /// Create a plain text request with provider defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Override the model for this request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Bind tools the model may call.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }
}

/// A brain's reply to a [`CompletionRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// Free text produced by the model, if any.
    pub text: Option<String>,
    /// Tool calls in the order the model emitted them.
    pub tool_calls: Vec<ToolRequest>,
}

impl Completion {
    /// A reply that is only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tool_calls: Vec::new(),
        }
    }

    /// A reply that is only tool calls.
    pub fn tool_calls(tool_calls: Vec<ToolRequest>) -> Self {
        Self {
            text: None,
            tool_calls,
        }
    }

    /// The first tool call, if the model made any.
    pub fn first_tool_call(&self) -> Option<&ToolRequest> {
        self.tool_calls.first()
    }

    /// The text content, or an empty string.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
