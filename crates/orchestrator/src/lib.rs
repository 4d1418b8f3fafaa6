//! Single-turn question router.
//!
//! This crate provides the [`Router`] type which sends a question to a
//! brain with the registry's tools bound, then runs the one tool the model
//! picked.
//!
//! # Flow
//!
//! ```text
//! Question
//!    ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │                         ROUTER                           │
//! │                                                          │
//! │  1. Wrap question in routing instructions                │
//! │         ↓                                                │
//! │  2. Classify (brain, temperature 0, tools bound)         │
//! │         ↓                                                │
//! │  3. First tool call?                                     │
//! │     • known tool   → run it with the extracted args      │
//! │     • unknown/none → general_question(original question) │
//! │         ↓                                                │
//! │  4. Return the tool's text as the answer                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_tools::default_registry;
//! use gemini_brain::GeminiBrain;
//! use orchestrator::Router;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = Arc::new(GeminiBrain::from_env()?);
//!     let registry = Arc::new(default_registry(brain.clone()));
//!     let router = Router::new(brain, registry);
//!
//!     let transcript = router.ask("weather in karachii rn").await?;
//!     println!("{}", transcript.answer());
//!     Ok(())
//! }
//! ```

mod error;
mod router;
mod transcript;

pub use error::OrchestratorError;
pub use router::{
    load_router_prompt, Router, DEFAULT_ROUTER_PROMPT_FILE, DEFAULT_ROUTER_SYSTEM_PROMPT,
    FALLBACK_TOOL,
};
pub use transcript::{Role, Transcript, Turn};
