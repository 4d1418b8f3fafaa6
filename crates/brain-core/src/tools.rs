//! Tool definitions and tool calls.
//!
//! A [`ToolDefinition`] describes a capability the model may select when it
//! is bound to a [`CompletionRequest`](crate::CompletionRequest). When the
//! model selects one, the brain reports it back as a [`ToolRequest`] carrying
//! the arguments the model extracted from the prompt.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Primitive type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamType {
    /// JSON-schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
        }
    }
}

/// Schema entry for one tool parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Primitive type of the value.
    #[serde(rename = "type")]
    pub kind: ParamType,
    /// What the model should put in this parameter.
    pub description: String,
    /// Whether the model must always supply it.
    pub required: bool,
}

/// A named, described, schema-bearing capability the model may select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name used for dispatch.
    pub name: String,
    /// Description shown to the model.
    pub description: String,
    /// Parameters in declaration order.
    pub parameters: IndexMap<String, ParamSpec>,
}

impl ToolDefinition {
    /// Create a definition with no parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: IndexMap::new(),
        }
    }

    /// Add a required parameter.
    pub fn param(mut self, name: impl Into<String>, kind: ParamType, description: impl Into<String>) -> Self {
        self.parameters.insert(
            name.into(),
            ParamSpec {
                kind,
                description: description.into(),
                required: true,
            },
        );
        self
    }

    /// Add an optional parameter.
    pub fn optional_param(
        mut self,
        name: impl Into<String>,
        kind: ParamType,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.insert(
            name.into(),
            ParamSpec {
                kind,
                description: description.into(),
                required: false,
            },
        );
        self
    }

    /// Names of the required parameters, in declaration order.
    pub fn required_params(&self) -> Vec<&str> {
        self.parameters
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Render the parameters as a JSON-schema object.
    pub fn json_schema(&self) -> Value {
        let mut properties = Map::new();
        for (name, spec) in &self.parameters {
            properties.insert(
                name.clone(),
                json!({
                    "type": spec.kind.as_str(),
                    "description": spec.description,
                }),
            );
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_params(),
        })
    }
}

/// A tool selected by the model, with the arguments it extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments keyed by parameter name.
    pub arguments: HashMap<String, Value>,
}

impl ToolRequest {
    /// Create a request from a JSON value.
    ///
    /// Anything other than a JSON object yields an empty argument map.
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Get a string argument by name.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }
}
