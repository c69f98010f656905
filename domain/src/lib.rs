//! Domain layer for specscout
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Endpoint catalog
//!
//! OpenAPI specifications are normalized into flat [`catalog::endpoint::EndpointRecord`]s,
//! each carrying a pre-rendered markdown summary. Records are searched lexically
//! with [`catalog::search::rank`]; there is no embedding index.
//!
//! ## Tool protocol
//!
//! The reasoning backend drives the catalog through a closed set of tools
//! ([`tool::ToolKind`]). Tool calls are validated against their declared
//! parameter schemas before dispatch, and every outcome is reported as a
//! [`tool::ToolResult`] so the model can keep reasoning after a failure.

pub mod catalog;
pub mod core;
pub mod prompt;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use catalog::{
    endpoint::{
        EndpointParameter, EndpointRecord, HttpMethod, RequestBody, ResponseEntry, endpoint_id,
    },
    search::{DEFAULT_LIMIT, MAX_LIMIT, RankedEndpoint, clamp_limit, rank, score_endpoint},
};
pub use core::error::DomainError;
pub use prompt::AgentPrompt;
pub use session::{
    entities::{Conversation, Message, Role},
    response::{ChatResponse, FinishReason, TokenUsage, ToolInvocation},
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolKind, ToolParameter},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
