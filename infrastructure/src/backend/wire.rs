//! Wire types for the chat completions API.
//!
//! This module defines the request/response structures exchanged with an
//! OpenAI-compatible `/v1/chat/completions` endpoint, plus the conversions
//! between them and the domain's [`Message`]/[`ChatResponse`] types.
//!
//! # Protocol Overview
//!
//! - **Request**: model, ordered messages, tool schemas, sampling parameters
//! - **Response**: one choice carrying text and/or tool invocations, the
//!   finish reason, and token usage
//! - **Error body**: `{"error": {"message": ...}}` on non-2xx statuses

use serde::{Deserialize, Serialize};
use specscout_domain::{ChatResponse, FinishReason, Message, Role, TokenUsage, ToolInvocation};

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<&'static str>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Build a request from domain messages. `tools` and `tool_choice` are
    /// only sent when the catalog is non-empty.
    pub fn new(
        model: impl Into<String>,
        messages: &[Message],
        tools: &[serde_json::Value],
        temperature: f64,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: messages.iter().map(WireMessage::from_domain).collect(),
            tools: (!tools.is_empty()).then(|| tools.to_vec()),
            tool_choice: (!tools.is_empty()).then_some("auto"),
            temperature,
            max_tokens,
        }
    }
}

/// One message in the wire format.
///
/// `content` serializes as `null` (not an empty string) on assistant turns
/// that only request tools; tool-result messages carry the invocation id
/// and tool name they answer.
#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WireMessage {
    pub fn from_domain(message: &Message) -> Self {
        let tool_calls = if message.tool_calls.is_empty() {
            None
        } else {
            Some(
                message
                    .tool_calls
                    .iter()
                    .map(WireToolCall::from_invocation)
                    .collect(),
            )
        };
        let content = if message.content.is_empty() && tool_calls.is_some() {
            None
        } else {
            Some(message.content.clone())
        };
        Self {
            role: role_name(message.role),
            content,
            tool_calls,
            tool_call_id: message.tool_call_id.clone(),
            name: message.tool_name.clone(),
        }
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    }
}

/// A tool call as it appears on the wire, both in requests (assistant
/// history) and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    pub function: WireFunctionCall,
}

impl WireToolCall {
    pub fn from_invocation(invocation: &ToolInvocation) -> Self {
        Self {
            id: invocation.id.clone(),
            call_type: "function".to_string(),
            function: WireFunctionCall {
                name: invocation.name.clone(),
                arguments: invocation.arguments.clone(),
            },
        }
    }

    pub fn into_invocation(self) -> ToolInvocation {
        ToolInvocation::new(self.id, self.function.name, self.function.arguments)
    }
}

/// The function half of a wire tool call. `arguments` stays a JSON-encoded
/// string end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<WireToolCall>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

impl ChatCompletionResponse {
    /// Collapse the wire response into the domain [`ChatResponse`].
    ///
    /// A response without choices is malformed; a missing finish reason is
    /// inferred from whether tool calls are present.
    pub fn into_chat_response(self) -> Result<ChatResponse, String> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| "response contained no choices".to_string())?;

        let tool_invocations: Vec<ToolInvocation> = choice
            .message
            .tool_calls
            .into_iter()
            .map(WireToolCall::into_invocation)
            .collect();
        let finish_reason = match choice.finish_reason.as_deref() {
            Some(reason) => FinishReason::from_api(reason),
            None if !tool_invocations.is_empty() => FinishReason::ToolCalls,
            None => FinishReason::Stop,
        };
        let usage = self
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens, u.total_tokens))
            .unwrap_or_default();

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            tool_invocations,
            finish_reason,
            model: self.model,
            usage,
        })
    }
}

/// Error body returned by the API on non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
}
