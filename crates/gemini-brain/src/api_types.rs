//! Gemini `generateContent` request and response types.

use brain_core::{ParamType, ToolDefinition};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A turn in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a turn: text or a function call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Function call requested by the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            function_call: None,
        }
    }
}

/// A function call emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Declared function name
    pub name: String,
    /// Arguments as a JSON object
    #[serde(default)]
    pub args: Value,
}

/// A tool entry in the request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiTool {
    /// Functions the model may call
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// A function the model may call.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    /// Function name
    pub name: String,
    /// What the function does
    pub description: String,
    /// OpenAPI-style parameter schema
    pub parameters: Value,
}

impl FunctionDeclaration {
    /// Build a declaration from a tool definition.
    ///
    /// Gemini's schema dialect uses upper-case type names.
    pub fn from_definition(definition: &ToolDefinition) -> Self {
        let mut properties = Map::new();
        for (name, spec) in &definition.parameters {
            properties.insert(
                name.clone(),
                json!({
                    "type": schema_type(spec.kind),
                    "description": spec.description,
                }),
            );
        }

        let mut parameters = json!({
            "type": "OBJECT",
            "properties": properties,
        });
        let required = definition.required_params();
        if !required.is_empty() {
            parameters["required"] = json!(required);
        }

        Self {
            name: definition.name.clone(),
            description: definition.description.clone(),
            parameters,
        }
    }
}

fn schema_type(kind: ParamType) -> &'static str {
    match kind {
        ParamType::String => "STRING",
        ParamType::Number => "NUMBER",
        ParamType::Integer => "INTEGER",
        ParamType::Boolean => "BOOLEAN",
    }
}

/// Sampling parameters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Tools to make available (optional)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<GeminiTool>,
    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Set when the prompt itself was rejected
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token usage
    pub usage_metadata: Option<UsageMetadata>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content (absent when the candidate was blocked)
    pub content: Option<Content>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Prompt-level safety feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if it was
    pub block_reason: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Prompt tokens
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Completion tokens
    #[serde(default)]
    pub candidates_token_count: u32,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    pub message: String,
    /// Canonical status, e.g. "INVALID_ARGUMENT"
    pub status: Option<String>,
}
