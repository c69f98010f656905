//! Tool executor port
//!
//! Defines the interface for executing documentation tools against the
//! endpoint cache.

use async_trait::async_trait;
use specscout_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how the application layer executes tool calls requested
/// by the reasoning backend. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Definitions of all available tools
    fn definitions(&self) -> &[ToolDefinition];

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.definitions().iter().any(|t| t.name == name)
    }

    /// Get the definition of a specific tool
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.definitions().iter().find(|t| t.name == name)
    }

    /// Execute a tool call.
    ///
    /// Failures are reported inside the returned [`ToolResult`], never as a
    /// panic or transport error, so the model can read the failure and keep
    /// reasoning.
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
