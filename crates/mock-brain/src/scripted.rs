//! Scripted brain implementation - replays canned completions in order.

use std::collections::VecDeque;

use async_trait::async_trait;
use brain_core::{Brain, BrainError, Completion, CompletionRequest};
use tokio::sync::Mutex;

/// A brain that returns pre-recorded completions, one per call.
///
/// Every request is recorded so tests can assert on the prompt, temperature,
/// model override and bound tools. Once the script runs out, further calls
/// return an empty completion.
#[derive(Debug, Default)]
pub struct ScriptedBrain {
    script: Mutex<VecDeque<Completion>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBrain {
    /// Create a brain that replays `script` in order.
    pub fn new(script: Vec<Completion>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of scripted completions not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl Brain for ScriptedBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        self.requests.lock().await.push(request);
        Ok(self.script.lock().await.pop_front().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }
}
