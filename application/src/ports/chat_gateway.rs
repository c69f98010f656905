//! Chat gateway port
//!
//! Defines the interface for communicating with the reasoning backend.

use async_trait::async_trait;
use specscout_domain::session::entities::Message;
use specscout_domain::session::response::ChatResponse;
use thiserror::Error;

/// Errors that can occur during chat gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No backend configured: {0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// True when the error means no backend credentials are present at all.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, GatewayError::NotConfigured(_))
    }
}

/// Gateway for reasoning backend communication
///
/// This port defines how the application layer talks to an OpenAI-compatible
/// chat completion API. Implementations (adapters) live in the infrastructure
/// layer. The gateway is stateless; the caller owns the conversation and
/// passes the full message list on every turn.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Run one chat completion over the given messages.
    ///
    /// `tools` is the JSON Schema tool list the model may call; pass an
    /// empty slice to disable tool use for the turn.
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[serde_json::Value],
    ) -> Result<ChatResponse, GatewayError>;

    /// Name of the model this gateway is configured for.
    fn model_name(&self) -> &str;
}
