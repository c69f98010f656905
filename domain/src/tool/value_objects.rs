//! Tool domain value objects: immutable result and error types
//!
//! Every tool execution produces a [`ToolResult`] with optional
//! [`ToolResultMetadata`] (timing, byte counts, match counts). Failures are
//! data, not exceptions: the reasoning backend can only react to what it
//! receives in the conversation, so every error crosses the tool boundary as
//! a structured payload.
//!
//! Error codes keep the failure classes distinguishable:
//!
//! | Code | Meaning |
//! |------|---------|
//! | `FETCH_FAILED` | Network/transport failure retrieving a spec URL |
//! | `INVALID_SPEC` | Body is not valid JSON, or not a spec-shaped object |
//! | `NOT_FOUND` | Provider or endpoint id not in the cache |
//! | `INVALID_ARGUMENT` | Arguments failed schema validation |
//! | `EXECUTION_FAILED` | Unexpected internal failure |

use serde::{Deserialize, Serialize};

/// Error that occurred during tool validation or execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "FETCH_FAILED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Actionable next step for the caller, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // Common error constructors
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::new("FETCH_FAILED", message)
    }

    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::new("INVALID_SPEC", message)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    /// The provider has never been loaded into the cache.
    pub fn provider_not_loaded(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        Self::new(
            "NOT_FOUND",
            format!("Provider '{}' not loaded in memory", provider),
        )
        .with_suggestion(format!(
            "Call load_spec with an OpenAPI URL to load '{}' first",
            provider
        ))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    /// Render the structured error object sent back to the reasoning
    /// backend as a tool result.
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "status": "error",
            "code": self.code,
            "error": self.message,
        });
        if let Some(suggestion) = &self.suggestion {
            payload["suggestion"] = serde_json::Value::String(suggestion.clone());
        }
        payload
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
///
/// The `output` of a successful execution is the serialized JSON payload
/// the reasoning backend will see verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Size of a fetched spec body in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// For load/list operations: number of endpoints involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_count: Option<usize>,
    /// For search operations: number of matches before truncation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add metadata to the result
    pub fn with_metadata(mut self, metadata: ToolResultMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// The exact text fed back to the reasoning backend: the success payload
    /// verbatim, or the structured error object for failures.
    pub fn render_for_model(&self) -> String {
        match (&self.output, &self.error) {
            (Some(output), _) => output.clone(),
            (None, Some(error)) => error.to_payload().to_string(),
            (None, None) => serde_json::json!({"status": "success"}).to_string(),
        }
    }
}
