use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ValyuError;

/// A named, host-invokable capability with a declared parameter schema.
///
/// The host runtime advertises each tool to the model via
/// [`as_tool_definition`](Tool::as_tool_definition) and dispatches the
/// model's JSON arguments into [`call`](Tool::call). Implementations are
/// `Send + Sync` so the host may invoke them concurrently.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable tool name the host dispatches on.
    fn name(&self) -> &'static str;

    /// Human-readable description shown to the model.
    fn description(&self) -> &'static str;

    /// JSON schema for the tool's arguments, if any.
    fn parameters(&self) -> Option<Value> {
        None
    }

    /// Invoke the tool with validated JSON arguments.
    async fn call(&self, args: Value) -> Result<Value, ValyuError>;

    /// Descriptor handed to the host runtime for registration.
    fn as_tool_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self
                .parameters()
                .unwrap_or_else(|| json!({ "type": "object", "properties": {} })),
        }
    }
}

/// Serializable tool descriptor: name, description, and parameter schema.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}
