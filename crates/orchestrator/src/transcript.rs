//! Two-turn transcript returned to the caller.

use serde::{Deserialize, Serialize};

/// Speaker of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

/// One turn of the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// The question and its answer, in that order.
///
/// Built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub history: Vec<Turn>,
}

impl Transcript {
    /// Build the transcript for one answered question.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            history: vec![
                Turn {
                    role: Role::User,
                    content: question.into(),
                },
                Turn {
                    role: Role::Ai,
                    content: answer.into(),
                },
            ],
        }
    }

    /// The answer turn's content.
    pub fn answer(&self) -> &str {
        self.history
            .iter()
            .find(|t| t.role == Role::Ai)
            .map(|t| t.content.as_str())
            .unwrap_or("")
    }
}
