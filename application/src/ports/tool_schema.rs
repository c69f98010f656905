//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for
//! the API" (infrastructure). The domain layer defines [`ToolDefinition`]
//! with typed parameters; this port handles the JSON Schema conversion the
//! chat completion API requires.

use specscout_domain::tool::entities::ToolDefinition;

/// Port for converting tool definitions to the backend wire format.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to a JSON Schema function object.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a JSON Schema array (sorted by name).
    fn all_tools_schema(&self, tools: &[ToolDefinition]) -> Vec<serde_json::Value>;
}
