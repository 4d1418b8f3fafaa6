//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use brain_core::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an f64 parameter, or `default` when it is absent or null.
    ///
    /// Numeric strings such as `"5"` are accepted, since models sometimes
    /// quote numbers.
    pub fn get_f64_or(&self, key: &str, default: f64) -> Result<f64, ToolError> {
        match self.params.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => parse_number(key, value),
        }
    }
}

fn parse_number(key: &str, value: &Value) -> Result<f64, ToolError> {
    let invalid = || ToolError::InvalidParameter {
        name: key.to_string(),
        reason: "expected number".to_string(),
    };

    match value {
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Output from a tool execution.
///
/// `content` is always user-facing text; failures carry their own marker
/// (e.g. `⚠️` or `❌`) rather than a structured code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The answer text.
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }
}

/// Trait for capability handlers the router can dispatch to.
///
/// Each tool wraps one external provider. Provider, transport and parse
/// failures are reported as a failed [`ToolOutput`]; `Err` is reserved for
/// arguments the tool cannot work with.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Schema-bearing definition bound to the model at classification time.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
