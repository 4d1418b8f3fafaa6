//! The Brain trait definition.

use async_trait::async_trait;

use crate::completion::{Completion, CompletionRequest};
use crate::error::BrainError;

/// A language-model backend.
///
/// A single call takes one prompt (optionally with tools bound) and returns
/// one [`Completion`]. Implementations hold no per-request state, so one
/// instance can be shared across concurrent requests behind an `Arc`.
/// This trait is object-safe and can be used with `Arc<dyn Brain>`.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Run a single completion.
    ///
    /// # Arguments
    ///
    /// * `request` - Prompt, sampling temperature, optional model override
    ///   and the tools the model may select.
    ///
    /// # Returns
    ///
    /// The model's reply (free text and/or tool calls), or an error if the
    /// provider could not be reached or answered with a failure.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError>;

    /// Get a human-readable name for this brain implementation.
    fn name(&self) -> &str;
}
