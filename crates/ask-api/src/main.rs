//! Question answering web service.
//!
//! Classifies each question with Gemini and answers it with the weather,
//! exchange rate or general question tool.

use std::sync::Arc;

use agent_tools::default_registry;
use ask_api::{build_router, AppState, Config};
use brain_core::Brain;
use gemini_brain::GeminiBrain;
use orchestrator::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting ask server");

    // Build the shared brain, tools and router
    let brain: Arc<dyn Brain> = Arc::new(GeminiBrain::from_env()?);
    let registry = Arc::new(default_registry(brain.clone()));
    let router = Router::new(brain, registry);

    // Build application state
    let state = AppState::new(router);

    // Build router
    let app = build_router(state, &config.static_dir);

    // Start server
    info!(
        addr = %config.addr,
        static_dir = %config.static_dir.display(),
        "Ask server listening"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
