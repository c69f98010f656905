//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The closed set of tools exposed to the reasoning backend.
///
/// Dispatch is an exhaustive match on this enum, so adding a tool is a
/// compile-time-checked change and an unknown tool name fails through one
/// well-defined error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Fetch an OpenAPI document from a URL and cache its endpoints
    LoadSpec,
    /// Rank cached endpoints against a free-text query
    SearchSpec,
    /// Fetch the full rendered documentation for one endpoint id
    GetEndpointDetail,
    /// Enumerate registered and dynamically loaded providers
    ListProviders,
}

impl ToolKind {
    /// Every tool, in catalog order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::LoadSpec,
        ToolKind::SearchSpec,
        ToolKind::GetEndpointDetail,
        ToolKind::ListProviders,
    ];

    /// The wire name the backend calls this tool by.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::LoadSpec => "load_spec",
            ToolKind::SearchSpec => "search_spec",
            ToolKind::GetEndpointDetail => "get_endpoint_detail",
            ToolKind::ListProviders => "list_loaded_providers",
        }
    }

    /// Resolve a wire name. Returns `None` for unknown tools.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "load_spec" => Some(ToolKind::LoadSpec),
            "search_spec" => Some(ToolKind::SearchSpec),
            "get_endpoint_detail" => Some(ToolKind::GetEndpointDetail),
            "list_loaded_providers" => Some(ToolKind::ListProviders),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ToolKind {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::core::error::DomainError::UnknownTool(s.to_string()))
    }
}

/// Definition of a tool that can be called by the reasoning backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "search_spec")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type ("string", "integer", "boolean", "array")
    pub param_type: String,
    /// Closed value set, for enum-constrained parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
            allowed_values: Vec::new(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }

    pub fn with_allowed_values(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// A call to a tool with parsed arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
    /// Backend-assigned invocation id, echoed on the result message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_id: Option<String>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
            native_id: None,
        }
    }

    /// Build a call from a backend tool invocation that has already had its
    /// argument payload parsed.
    pub fn from_native(
        id: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
            native_id: Some(id.into()),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional i64 argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(|v| v.as_i64())
    }
}
