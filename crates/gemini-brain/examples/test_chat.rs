//! Send one prompt to Gemini and print the reply.
//!
//! Run with: cargo run -p gemini-brain --example test_chat
//! Or with a custom prompt: cargo run -p gemini-brain --example test_chat -- "Your prompt here"
//!
//! Make sure to set environment variables in .env:
//!   GOOGLE_API_KEY - Gemini API key

use gemini_brain::{Brain, CompletionRequest, GeminiBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let prompt = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Hello! Please respond with a short greeting.".to_string()
    };

    let brain = GeminiBrain::from_env()?;

    println!("Brain initialized: {}", brain.name());
    println!("API URL: {}", brain.config().api_url);
    println!("Model: {}", brain.config().model);
    println!();
    println!("Sending: \"{}\"", prompt);

    let reply = brain
        .complete(CompletionRequest::new(prompt).with_temperature(0.3))
        .await?;

    println!("=== Response ===");
    println!("{}", reply.text_or_empty());
    println!("================");

    Ok(())
}
