//! Question routing using a tool-calling brain.

use std::env;
use std::path::Path;
use std::sync::Arc;

use agent_tools::ToolRegistry;
use brain_core::{hash_prompt, Brain, CompletionRequest, ToolRequest};
use serde_json::Value;
use tracing::{debug, info, trace, warn};

use crate::error::OrchestratorError;
use crate::transcript::Transcript;

/// Default path for the router prompt file.
pub const DEFAULT_ROUTER_PROMPT_FILE: &str = "ROUTER_PROMPT.md";

/// Tool every unmatched question falls back to.
pub const FALLBACK_TOOL: &str = "general_question";

/// Default router instructions (fallback if no file or env var is set).
///
/// The user's question is appended after these instructions.
pub const DEFAULT_ROUTER_SYSTEM_PROMPT: &str = "You are a smart, task-routing AI. \
When the user asks about weather, no matter how casually or informally phrased, identify and correct any misspelled city names using best-guess logic. \
Resolve slang like 'rn' to 'right now' and extract both weather metrics (e.g. humidity, temperature, rain) and location names. \
If multiple cities or metrics are mentioned, handle each one separately and call the weather tool with the corrected city name. \
For currency conversions, call the exchange_rate tool with ISO currency codes. \
Respond only with tool calls, never with free text.";

/// Load the router system prompt.
///
/// Priority:
/// 1. `ROUTER_SYSTEM_PROMPT` env var (if set)
/// 2. Contents of prompt file (`ROUTER_PROMPT_FILE` or default `ROUTER_PROMPT.md`)
/// 3. Embedded default prompt
pub fn load_router_prompt() -> String {
    // 1. Check for inline env var
    if let Ok(prompt) = env::var("ROUTER_SYSTEM_PROMPT") {
        if !prompt.trim().is_empty() {
            info!("Using router prompt from ROUTER_SYSTEM_PROMPT env var");
            return prompt;
        }
    }

    // 2. Try to load from file
    let prompt_file = env::var("ROUTER_PROMPT_FILE")
        .unwrap_or_else(|_| DEFAULT_ROUTER_PROMPT_FILE.to_string());

    if let Some(prompt) = load_prompt_file(&prompt_file) {
        info!("Loaded router prompt from {}", prompt_file);
        return prompt;
    }

    // 3. Fall back to embedded default
    info!("Using embedded default router prompt");
    DEFAULT_ROUTER_SYSTEM_PROMPT.to_string()
}

/// Load a prompt from a file path.
///
/// Returns `Some(content)` if the file exists and is readable, `None` otherwise.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path.as_ref()).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Router that classifies a question with one tool-calling completion and
/// dispatches to the selected tool.
///
/// The router is stateless. It holds shared read-only handles to the brain
/// and the registry, so one instance serves every request.
pub struct Router {
    brain: Arc<dyn Brain>,
    registry: Arc<ToolRegistry>,
    prompt: String,
    prompt_hash: String,
}

impl Router {
    /// Create a router using the prompt from `load_router_prompt`.
    pub fn new(brain: Arc<dyn Brain>, registry: Arc<ToolRegistry>) -> Self {
        Self::with_prompt(brain, registry, load_router_prompt())
    }

    /// Create a router with explicit instructions.
    pub fn with_prompt(
        brain: Arc<dyn Brain>,
        registry: Arc<ToolRegistry>,
        prompt: impl Into<String>,
    ) -> Self {
        let prompt = prompt.into();
        let prompt_hash = hash_prompt(&prompt);

        info!(
            brain = brain.name(),
            tools = ?registry.list_tools(),
            "Router prompt fingerprint: {}",
            prompt_hash
        );

        Self {
            brain,
            registry,
            prompt,
            prompt_hash,
        }
    }

    /// Get the router prompt fingerprint.
    pub fn prompt_hash(&self) -> &str {
        &self.prompt_hash
    }

    /// The registry this router dispatches into.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Wrap a question in the routing instructions.
    pub fn format_router_input(&self, question: &str) -> String {
        format!("{}\n\nUser asked: '{}'", self.prompt, question)
    }

    /// Answer a question.
    ///
    /// Only the classification call can fail; anything that goes wrong
    /// inside a tool comes back as answer text.
    pub async fn route(&self, question: &str) -> Result<String, OrchestratorError> {
        let request = CompletionRequest::new(self.format_router_input(question))
            .with_temperature(0.0)
            .with_tools(self.registry.definitions());

        let completion = self.brain.complete(request).await?;

        trace!(
            text = ?completion.text,
            tool_calls = completion.tool_calls.len(),
            "ROUTER_RAW_RESPONSE"
        );

        if completion.tool_calls.len() > 1 {
            let dropped: Vec<&str> = completion.tool_calls[1..]
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            warn!(?dropped, "Model selected several tools; only the first is dispatched");
        }

        match completion.first_tool_call() {
            Some(call) if self.registry.has_tool(&call.name) => Ok(self.dispatch(call).await),
            Some(call) => {
                warn!(tool = %call.name, "Model selected an unknown tool; falling back");
                Ok(self.fallback(question).await)
            }
            None => {
                debug!("No tool selected; falling back to {}", FALLBACK_TOOL);
                Ok(self.fallback(question).await)
            }
        }
    }

    /// Answer a question and pair it with the answer.
    pub async fn ask(&self, question: &str) -> Result<Transcript, OrchestratorError> {
        let answer = self.route(question).await?;
        Ok(Transcript::new(question, answer))
    }

    async fn dispatch(&self, call: &ToolRequest) -> String {
        info!(tool = %call.name, "Dispatching question");

        match self.registry.execute(&call.name, call.arguments.clone()).await {
            Ok(output) => output.content,
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Tool rejected arguments");
                format!("❌ Error: {}", e)
            }
        }
    }

    /// Send the original, unwrapped question to the general tool.
    async fn fallback(&self, question: &str) -> String {
        let arguments = [(
            "question".to_string(),
            Value::String(question.to_string()),
        )]
        .into_iter()
        .collect();

        self.dispatch(&ToolRequest {
            name: FALLBACK_TOOL.to_string(),
            arguments,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_tools::{
        async_trait, registry_with_config, Tool, ToolArgs, ToolError, ToolOutput, ToolsConfig,
    };
    use brain_core::{Completion, ParamType, ToolDefinition};
    use mock_brain::{FailingBrain, ScriptedBrain};
    use serde_json::json;
    use std::sync::Mutex;

    /// Weather stand-in that records the cities it was asked about.
    #[derive(Default)]
    struct FakeWeather {
        cities: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Tool for FakeWeather {
        fn name(&self) -> &str {
            "weather"
        }

        fn description(&self) -> &str {
            "Fake weather"
        }

        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("weather", "Fake weather").param("city", ParamType::String, "City")
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let city = args.get_string("city")?;
            self.cities.lock().unwrap().push(city.clone());
            Ok(ToolOutput::success(format!("🌤️ Weather in {}:", city)))
        }
    }

    fn setup(script: Vec<Completion>) -> (Arc<ScriptedBrain>, Arc<FakeWeather>, Router) {
        let brain = Arc::new(ScriptedBrain::new(script));
        let weather = Arc::new(FakeWeather::default());

        let mut registry = registry_with_config(brain.clone(), ToolsConfig::default());
        registry.register_boxed(weather.clone());

        let router = Router::with_prompt(brain.clone(), Arc::new(registry), "Route this.");
        (brain, weather, router)
    }

    fn call(name: &str, args: Value) -> ToolRequest {
        ToolRequest::new(name, args)
    }

    #[test]
    fn test_format_router_input() {
        let (_, _, router) = setup(vec![]);
        assert_eq!(
            router.format_router_input("weather in lahor rn?"),
            "Route this.\n\nUser asked: 'weather in lahor rn?'"
        );
    }

    #[test]
    fn test_load_prompt_file_missing() {
        assert_eq!(load_prompt_file("/nonexistent/ROUTER_PROMPT.md"), None);
    }

    #[test]
    fn test_default_prompt_mentions_tool_only_replies() {
        assert!(DEFAULT_ROUTER_SYSTEM_PROMPT.contains("misspelled city names"));
        assert!(DEFAULT_ROUTER_SYSTEM_PROMPT.contains("'rn' to 'right now'"));
    }

    #[tokio::test]
    async fn test_classification_request_shape() {
        let (brain, _, router) = setup(vec![Completion::tool_calls(vec![call(
            "weather",
            json!({"city": "Lahore"}),
        )])]);

        router.route("weather in lahor rn?").await.unwrap();

        let requests = brain.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, Some(0.0));
        assert!(requests[0].prompt.ends_with("User asked: 'weather in lahor rn?'"));
        let names: Vec<&str> = requests[0].tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["weather", "exchange_rate", "general_question"]);
    }

    #[tokio::test]
    async fn test_dispatches_selected_tool() {
        let (_, weather, router) = setup(vec![Completion::tool_calls(vec![call(
            "weather",
            json!({"city": "Lahore"}),
        )])]);

        let answer = router.route("weather in lahor rn?").await.unwrap();
        assert_eq!(answer, "🌤️ Weather in Lahore:");
        assert_eq!(*weather.cities.lock().unwrap(), vec!["Lahore"]);
    }

    #[tokio::test]
    async fn test_only_first_call_is_dispatched() {
        let (_, weather, router) = setup(vec![Completion::tool_calls(vec![
            call("weather", json!({"city": "Paris"})),
            call("weather", json!({"city": "Rome"})),
        ])]);

        let answer = router.route("weather in paris and rome").await.unwrap();
        assert_eq!(answer, "🌤️ Weather in Paris:");
        assert_eq!(*weather.cities.lock().unwrap(), vec!["Paris"]);
    }

    #[tokio::test]
    async fn test_text_reply_falls_back_with_original_question() {
        let (brain, weather, router) = setup(vec![
            Completion::text("I would rather just chat."),
            Completion::text("William Shakespeare."),
        ]);

        let answer = router.route("who wrote hamlet").await.unwrap();
        assert_eq!(answer, "William Shakespeare.");
        assert!(weather.cities.lock().unwrap().is_empty());

        let requests = brain.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].prompt, "who wrote hamlet");
        assert_eq!(requests[1].temperature, Some(0.3));
        assert!(requests[1].tools.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_falls_back() {
        let (brain, _, router) = setup(vec![
            Completion::tool_calls(vec![call("stock_price", json!({"ticker": "ACME"}))]),
            Completion::text("I can't look up stocks."),
        ]);

        let answer = router.route("price of ACME?").await.unwrap();
        assert_eq!(answer, "I can't look up stocks.");
        assert_eq!(brain.requests().await[1].prompt, "price of ACME?");
    }

    #[tokio::test]
    async fn test_bad_arguments_become_error_answer() {
        let (_, _, router) = setup(vec![Completion::tool_calls(vec![call(
            "weather",
            json!({}),
        )])]);

        let answer = router.route("weather?").await.unwrap();
        assert_eq!(answer, "❌ Error: Missing required parameter: city");
    }

    #[tokio::test]
    async fn test_classification_failure_propagates() {
        let brain = Arc::new(FailingBrain::new("connection refused"));
        let registry = registry_with_config(brain.clone(), ToolsConfig::default());
        let router = Router::with_prompt(brain, Arc::new(registry), "Route this.");

        let err = router.route("anything").await.unwrap_err();
        assert!(matches!(err, OrchestratorError::Classification(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_ask_builds_transcript() {
        let (_, _, router) = setup(vec![Completion::tool_calls(vec![call(
            "weather",
            json!({"city": "Oslo"}),
        )])]);

        let transcript = router.ask("oslo weather").await.unwrap();
        assert_eq!(transcript.history.len(), 2);
        assert_eq!(transcript.history[0].content, "oslo weather");
        assert_eq!(transcript.answer(), "🌤️ Weather in Oslo:");
    }
}
