//! Reasoning backend adapter
//!
//! Implements the application layer's [`ChatGateway`] port against any
//! OpenAI-compatible chat completions server.
//!
//! [`ChatGateway`]: specscout_application::ports::chat_gateway::ChatGateway

pub mod gateway;
pub mod wire;

pub use gateway::{BackendSettings, OpenAiChatGateway};
