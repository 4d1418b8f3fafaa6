//! Route a single question from the command line.
//!
//! Run with: cargo run -p orchestrator --example ask -- "weather in lahor rn?"
//!
//! Configuration via .env file or environment variables:
//!   GOOGLE_API_KEY       - Gemini API key (required)
//!   OPENWEATHER_API_KEY  - OpenWeather API key
//!   EXCHANGE_API_KEY     - ExchangeRate-API key

use std::env;
use std::sync::Arc;

use agent_tools::default_registry;
use gemini_brain::GeminiBrain;
use orchestrator::Router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orchestrator=debug".parse()?)
                .add_directive("agent_tools=debug".parse()?),
        )
        .init();

    let question = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let question = if question.trim().is_empty() {
        "What is 5 USD in EUR?".to_string()
    } else {
        question
    };

    let brain = Arc::new(GeminiBrain::from_env()?);
    let registry = Arc::new(default_registry(brain.clone()));
    let router = Router::new(brain, registry);

    let transcript = router.ask(&question).await?;
    println!("{}", serde_json::to_string_pretty(&transcript)?);

    Ok(())
}
