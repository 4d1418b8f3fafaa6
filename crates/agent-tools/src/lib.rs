//! Capability handlers for the ask service.
//!
//! This crate provides a `ToolRegistry` holding the three tools the router
//! can dispatch to. Each tool wraps one external provider and turns its
//! response into user-facing text, with failures carrying a `⚠️` or `❌`
//! marker instead of bubbling up as errors.
//!
//! # Built-in Tools
//!
//! - [`Weather`] - Current conditions via OpenWeather geocoding + weather APIs.
//! - [`ExchangeRate`] - Currency conversion via ExchangeRate-API.
//! - [`GeneralQuestion`] - Free-text answer straight from the language model.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_tools::default_registry;
//! use gemini_brain::GeminiBrain;
//!
//! #[tokio::main]
//! async fn main() {
//!     let brain = Arc::new(GeminiBrain::from_env().unwrap());
//!     let registry = default_registry(brain);
//!
//!     let result = registry
//!         .execute_json("exchange_rate", r#"{"from_currency": "USD", "to_currency": "EUR"}"#)
//!         .await
//!         .unwrap();
//!     println!("{}", result.content); // "💱 1 USD = 0.92 EUR (Rate: 0.92)"
//! }
//! ```

use std::sync::Arc;

use brain_core::Brain;

mod error;
mod registry;
mod tool;
pub mod tools;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{
    ExchangeRate, ExchangeRateConfig, GeneralQuestion, GeneralQuestionConfig, Weather,
    WeatherConfig,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Settings for every built-in tool.
#[derive(Debug, Clone, Default)]
pub struct ToolsConfig {
    pub weather: WeatherConfig,
    pub exchange_rate: ExchangeRateConfig,
    pub general_question: GeneralQuestionConfig,
}

impl ToolsConfig {
    /// Load every tool's settings from the environment.
    pub fn from_env() -> Self {
        Self {
            weather: WeatherConfig::from_env(),
            exchange_rate: ExchangeRateConfig::from_env(),
            general_question: GeneralQuestionConfig::from_env(),
        }
    }
}

/// Create a registry with the built-in tools, configured from the environment.
pub fn default_registry(brain: Arc<dyn Brain>) -> ToolRegistry {
    registry_with_config(brain, ToolsConfig::from_env())
}

/// Create a registry with the built-in tools using explicit settings.
///
/// Registration order is weather, exchange_rate, general_question.
pub fn registry_with_config(brain: Arc<dyn Brain>, config: ToolsConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Weather::new(config.weather));
    registry.register(ExchangeRate::new(config.exchange_rate));
    registry.register(GeneralQuestion::new(brain, config.general_question));

    registry
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use serde_json::Value;

    use crate::ToolArgs;

    /// Build tool arguments from a JSON object literal.
    pub fn args(value: Value) -> ToolArgs {
        let params: HashMap<String, Value> = match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        ToolArgs::new(params)
    }

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub async fn spawn_stub(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });
        format!("http://{}", addr)
    }
}
