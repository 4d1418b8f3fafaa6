//! GeminiBrain implementation using the Gemini REST API.

use std::time::Duration;

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest, ToolRequest};
use reqwest::Client;
use tracing::{debug, info, trace};

use crate::api_types::{
    ApiError, Content, FunctionDeclaration, GeminiTool, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiBrainConfig;

/// A brain implementation that uses Google's Gemini API.
///
/// GeminiBrain is stateless: every call sends exactly one user turn, so a
/// single instance can serve concurrent requests.
pub struct GeminiBrain {
    client: Client,
    config: GeminiBrainConfig,
}

impl GeminiBrain {
    /// Create a new GeminiBrain with the given configuration.
    pub fn new(config: GeminiBrainConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!("GeminiBrain initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a GeminiBrain from environment variables.
    ///
    /// See [`GeminiBrainConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(GeminiBrainConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiBrainConfig {
        &self.config
    }

    /// Build the request body for a completion.
    fn build_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let tools = if request.tools.is_empty() {
            Vec::new()
        } else {
            vec![GeminiTool {
                function_declarations: request
                    .tools
                    .iter()
                    .map(FunctionDeclaration::from_definition)
                    .collect(),
            }]
        };

        let generation_config =
            if request.temperature.is_some() || self.config.max_output_tokens.is_some() {
                Some(GenerationConfig {
                    temperature: request.temperature,
                    max_output_tokens: self.config.max_output_tokens,
                })
            } else {
                None
            };

        GenerateContentRequest {
            contents: vec![Content::user(request.prompt.clone())],
            tools,
            generation_config,
        }
    }

    /// Make a `generateContent` request to the Gemini API.
    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BrainError> {
        let url = self.config.generate_content_url(model);

        debug!(
            "Sending request to Gemini API: model={}, tools={}",
            model,
            body.tools.first().map_or(0, |t| t.function_declarations.len())
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| BrainError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            let message = match serde_json::from_str::<ApiError>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => error_text,
            };

            return Err(BrainError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        trace!("Received response from Gemini API: {:?}", completion);

        Ok(completion)
    }
}

/// Fold the first candidate of a response into a [`Completion`].
///
/// Text parts are concatenated; function calls keep their emitted order.
fn completion_from_response(response: GenerateContentResponse) -> Result<Completion, BrainError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(BrainError::ProcessingFailed(format!("Prompt blocked: {}", reason)));
        }
        return Ok(Completion::default());
    };

    let mut text = String::new();
    let mut tool_calls = Vec::new();

    for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
        if let Some(fragment) = part.text {
            text.push_str(&fragment);
        }
        if let Some(call) = part.function_call {
            tool_calls.push(ToolRequest::new(call.name, call.args));
        }
    }

    Ok(Completion {
        text: if text.is_empty() { None } else { Some(text) },
        tool_calls,
    })
}

#[async_trait]
impl Brain for GeminiBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let body = self.build_request(&request);

        let response = self.generate_content(model, &body).await?;

        if let Some(ref usage) = response.usage_metadata {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        let completion = completion_from_response(response)?;
        debug!(
            "Gemini reply: {} chars of text, {} tool call(s)",
            completion.text_or_empty().len(),
            completion.tool_calls.len()
        );

        Ok(completion)
    }

    fn name(&self) -> &str {
        "GeminiBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::{ParamType, ToolDefinition};

    fn brain() -> GeminiBrain {
        GeminiBrain::new(GeminiBrainConfig::builder().api_key("test-key").build()).unwrap()
    }

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_brain_name() {
        assert_eq!(brain().name(), "GeminiBrain");
    }

    #[test]
    fn test_build_request_plain_text() {
        let body = brain().build_request(&CompletionRequest::new("hello"));
        assert!(body.tools.is_empty());
        assert!(body.generation_config.is_none());
        assert_eq!(body.contents.len(), 1);
    }

    #[test]
    fn test_build_request_with_tools() {
        let request = CompletionRequest::new("weather in pariss")
            .with_temperature(0.0)
            .with_tools(vec![ToolDefinition::new("weather", "Weather").param(
                "city",
                ParamType::String,
                "City",
            )]);

        let body = brain().build_request(&request);
        assert_eq!(body.tools.len(), 1);
        assert_eq!(body.tools[0].function_declarations[0].name, "weather");
        assert_eq!(body.generation_config.unwrap().temperature, Some(0.0));
    }

    #[test]
    fn test_completion_from_text_parts() {
        let completion = completion_from_response(parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}}]}"#,
        ))
        .unwrap();

        assert_eq!(completion.text.as_deref(), Some("Hello, world"));
        assert!(completion.tool_calls.is_empty());
    }

    #[test]
    fn test_completion_keeps_call_order() {
        let completion = completion_from_response(parse(
            r#"{"candidates": [{"content": {"parts": [
                {"functionCall": {"name": "weather", "args": {"city": "Paris"}}},
                {"functionCall": {"name": "weather", "args": {"city": "Rome"}}}
            ]}}]}"#,
        ))
        .unwrap();

        assert!(completion.text.is_none());
        assert_eq!(completion.tool_calls.len(), 2);
        assert_eq!(completion.tool_calls[0].get_string("city"), Some("Paris"));
        assert_eq!(completion.tool_calls[1].get_string("city"), Some("Rome"));
    }

    #[test]
    fn test_completion_without_candidates() {
        let completion = completion_from_response(parse(r#"{}"#)).unwrap();
        assert_eq!(completion, Completion::default());

        let blocked = completion_from_response(parse(
            r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#,
        ));
        assert!(matches!(blocked, Err(BrainError::ProcessingFailed(msg)) if msg.contains("SAFETY")));
    }
}
