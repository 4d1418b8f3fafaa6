//! Google Gemini brain implementation.
//!
//! This crate provides a [`Brain`] that talks to the Gemini
//! `generateContent` REST endpoint, covering both modes the ask service
//! needs:
//!
//! - Plain text completion (general-knowledge answers)
//! - Function calling, where bound [`brain_core::ToolDefinition`]s are sent
//!   as function declarations and the model's `functionCall` parts come back
//!   as [`brain_core::ToolRequest`]s
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_brain::{Brain, CompletionRequest, GeminiBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = GeminiBrain::from_env()?;
//!     let reply = brain
//!         .complete(CompletionRequest::new("Name three rivers.").with_temperature(0.3))
//!         .await?;
//!     println!("{}", reply.text_or_empty());
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::GeminiBrain;
pub use config::GeminiBrainConfig;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, Brain, BrainError, Completion, CompletionRequest, ParamType, ToolDefinition,
    ToolRequest,
};
