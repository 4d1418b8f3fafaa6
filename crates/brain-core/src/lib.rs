//! Core trait and types for language-model backends.
//!
//! This crate provides the shared interface between the router, the tools
//! and whichever language-model provider answers them. It defines:
//!
//! - [`Brain`] - The trait that all model backends implement
//! - [`CompletionRequest`] / [`Completion`] - One prompt in, one reply out
//! - [`ToolDefinition`] - A capability the model may select, with its schema
//! - [`ToolRequest`] - A capability the model did select, with its arguments
//! - [`BrainError`] - Error types for model calls
//!
//! # Example
//!
//! ```rust
//! use brain_core::{Brain, BrainError, Completion, CompletionRequest};
//! use async_trait::async_trait;
//!
//! struct ShoutingBrain;
//!
//! #[async_trait]
//! impl Brain for ShoutingBrain {
//!     async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
//!         Ok(Completion::text(request.prompt.to_uppercase()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ShoutingBrain"
//!     }
//! }
//! ```

mod completion;
mod error;
mod prompt;
mod tools;
mod trait_def;

pub use completion::{Completion, CompletionRequest};
pub use error::BrainError;
pub use prompt::hash_prompt;
pub use tools::{ParamSpec, ParamType, ToolDefinition, ToolRequest};
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
