//! Mock brain implementations for exercising routing without a live model.
//!
//! This crate provides mock implementations of the `Brain` trait for testing:
//! - `ScriptedBrain` - Replays canned completions and records every request
//! - `EchoBrain` - Answers with the prompt it was given
//! - `FailingBrain` - Fails every call with a fixed error
//!
//! For production use, see the `gemini-brain` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, Completion, CompletionRequest, ScriptedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = ScriptedBrain::new(vec![Completion::text("It is sunny.")]);
//!
//!     let reply = brain.complete(CompletionRequest::new("How is the weather?")).await?;
//!     assert_eq!(reply.text_or_empty(), "It is sunny.");
//!     assert_eq!(brain.requests().await.len(), 1);
//!     Ok(())
//! }
//! ```

mod echo;
mod failing;
mod scripted;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, Brain, BrainError, Completion, CompletionRequest, ToolDefinition, ToolRequest,
};

pub use echo::EchoBrain;
pub use failing::FailingBrain;
pub use scripted::ScriptedBrain;
