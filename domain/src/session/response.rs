//! Structured reasoning-backend responses.
//!
//! A [`ChatResponse`] is what one completion call returns: assistant text,
//! zero or more requested tool invocations, the reason the model stopped,
//! and token accounting. When [`FinishReason::ToolCalls`] is returned the
//! caller must execute the requested tools and send their results back in a
//! follow-up pass.

use serde::{Deserialize, Serialize};

/// A tool invocation requested by the reasoning backend.
///
/// `arguments` is kept as the raw JSON-encoded string the backend produced;
/// it is parsed (and validated) only at dispatch time so a malformed
/// payload becomes a structured tool error instead of losing the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Backend-assigned id, echoed back on the tool-result message
    pub id: String,
    /// Requested tool name
    pub name: String,
    /// JSON-encoded argument object
    pub arguments: String,
}

impl ToolInvocation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// Parse the argument payload into a JSON map.
    pub fn parse_arguments(
        &self,
    ) -> Result<std::collections::HashMap<String, serde_json::Value>, serde_json::Error> {
        serde_json::from_str(&self.arguments)
    }
}

/// Reason the model stopped generating.
///
/// `ToolCalls` drives the orchestration loop: the conversation is not done
/// until a response arrives with some other reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of response
    Stop,
    /// The model wants tools executed before it can answer
    ToolCalls,
    /// Completion token budget exhausted; text may be truncated
    Length,
    /// Backend-specific reason, passed through verbatim
    Other(String),
}

impl FinishReason {
    /// Map a wire-level finish reason string onto the enum.
    pub fn from_api(s: &str) -> Self {
        match s {
            "stop" => FinishReason::Stop,
            "tool_calls" => FinishReason::ToolCalls,
            "length" => FinishReason::Length,
            other => FinishReason::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::ToolCalls => "tool_calls",
            FinishReason::Length => "length",
            FinishReason::Other(s) => s,
        }
    }
}

/// Token accounting for one or more completion passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u64, completion_tokens: u64, total_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }

    /// Accumulate usage across passes of one query.
    pub fn add(&mut self, other: &TokenUsage) {
        self.prompt_tokens += other.prompt_tokens;
        self.completion_tokens += other.completion_tokens;
        self.total_tokens += other.total_tokens;
    }
}

/// A structured response from the reasoning backend.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Assistant text (may be empty when only tools were requested)
    pub content: String,
    /// Tool invocations the model wants executed, in request order
    pub tool_invocations: Vec<ToolInvocation>,
    pub finish_reason: FinishReason,
    /// Model identifier reported by the backend, if any
    pub model: Option<String>,
    pub usage: TokenUsage,
}

impl ChatResponse {
    /// Create a plain text response with no tool requests.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            tool_invocations: Vec::new(),
            finish_reason: FinishReason::Stop,
            model: None,
            usage: TokenUsage::default(),
        }
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_invocations.is_empty()
    }
}
