//! Configuration for GeminiBrain.

use std::env;

use tracing::warn;

/// Default Gemini REST API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model used when a request carries no override.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default HTTP timeout for API requests (60 seconds).
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Configuration for GeminiBrain.
#[derive(Debug, Clone)]
pub struct GeminiBrainConfig {
    /// Gemini API base URL.
    pub api_url: String,

    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum output tokens for a response.
    pub max_output_tokens: Option<u32>,

    /// Per-request HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl GeminiBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// - `GOOGLE_API_KEY` - API key (a missing key is only warned about;
    ///   calls will then fail at the provider)
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash)
    /// - `GEMINI_MAX_OUTPUT_TOKENS` - Max output tokens (default: provider default)
    /// - `GEMINI_TIMEOUT_SECS` - HTTP timeout (default: 60)
    pub fn from_env() -> Self {
        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("GOOGLE_API_KEY not set; Gemini calls will fail");
        }

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_output_tokens = env::var("GEMINI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            api_url,
            api_key,
            model,
            max_output_tokens,
            timeout_secs,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiBrainConfigBuilder {
        GeminiBrainConfigBuilder::default()
    }

    /// Full URL of the `generateContent` endpoint for a model.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            model
        )
    }
}

/// Builder for GeminiBrainConfig.
#[derive(Debug, Default)]
pub struct GeminiBrainConfigBuilder {
    config: GeminiBrainConfig,
}

impl GeminiBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max output tokens.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.config.max_output_tokens = Some(tokens);
        self
    }

    /// Set the HTTP timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiBrainConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiBrainConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.max_output_tokens.is_none());
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_builder_all_options() {
        let config = GeminiBrainConfig::builder()
            .api_key("my-key")
            .api_url("http://127.0.0.1:9999/")
            .model("gemini-2.0-flash")
            .max_output_tokens(256)
            .timeout_secs(5)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.max_output_tokens, Some(256));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(
            config.generate_content_url("gemini-2.0-flash"),
            "http://127.0.0.1:9999/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_gemini_vars() {
            std::env::remove_var("GOOGLE_API_KEY");
            std::env::remove_var("GEMINI_API_URL");
            std::env::remove_var("GEMINI_MODEL");
            std::env::remove_var("GEMINI_MAX_OUTPUT_TOKENS");
            std::env::remove_var("GEMINI_TIMEOUT_SECS");
        }

        // Missing key is tolerated
        clear_all_gemini_vars();
        let config = GeminiBrainConfig::from_env();
        assert!(config.api_key.is_empty());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);

        // All vars set
        std::env::set_var("GOOGLE_API_KEY", "env-key");
        std::env::set_var("GEMINI_API_URL", "https://gemini.test");
        std::env::set_var("GEMINI_MODEL", "gemini-pro");
        std::env::set_var("GEMINI_MAX_OUTPUT_TOKENS", "512");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "15");

        let config = GeminiBrainConfig::from_env();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_url, "https://gemini.test");
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.max_output_tokens, Some(512));
        assert_eq!(config.timeout_secs, 15);

        // Unparseable numbers fall back to defaults
        std::env::set_var("GEMINI_MAX_OUTPUT_TOKENS", "lots");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "soon");
        let config = GeminiBrainConfig::from_env();
        assert!(config.max_output_tokens.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);

        clear_all_gemini_vars();
    }
}
