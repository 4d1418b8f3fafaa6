//! Exercise each tool against the live providers.
//!
//! Run with: cargo run -p agent-tools --example test_tools
//!
//! Needs OPENWEATHER_API_KEY and EXCHANGE_API_KEY. The general question
//! tool is driven by an echo brain so no model key is required.

use std::sync::Arc;

use agent_tools::{default_registry, ToolRegistry};
use mock_brain::EchoBrain;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agent_tools=debug".parse()?),
        )
        .init();

    println!("=== Agent Tools Test ===\n");

    let registry = default_registry(Arc::new(EchoBrain::with_prefix("[echo] ")));

    println!("Registered tools:");
    for (name, desc) in registry.get_descriptions() {
        println!("  - {}: {}", name, desc);
    }
    println!();

    run(&registry, "weather", r#"{"city": "Lahor"}"#).await?;
    run(&registry, "weather", r#"{"city": "Nowhereville"}"#).await?;
    run(
        &registry,
        "exchange_rate",
        r#"{"from_currency": "usd", "to_currency": "pkr", "amount": 50}"#,
    )
    .await?;
    run(&registry, "exchange_rate", r#"{"from_currency": "USD", "to_currency": "USD"}"#).await?;
    run(&registry, "general_question", r#"{"question": "Who painted the Mona Lisa?"}"#).await?;

    println!("\n=== All tests completed ===");
    Ok(())
}

async fn run(
    registry: &ToolRegistry,
    tool: &str,
    args: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- {} {} ---", tool, args);
    let output = registry.execute_json(tool, args).await?;
    let status = if output.success { "ok" } else { "failed" };
    println!("[{}]\n{}\n", status, output.content);
    Ok(())
}
