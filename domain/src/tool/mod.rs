//! Tool domain module
//!
//! This module defines the core abstractions for the **tool protocol
//! surface**: the fixed catalog of operations the reasoning backend can
//! invoke to load, search and inspect API documentation.
//!
//! # Overview
//!
//! Every tool is one variant of the closed [`ToolKind`] enum, described by a
//! [`ToolDefinition`] (name, parameters, enums), invoked via a [`ToolCall`],
//! and answered with a [`ToolResult`] whose payload is the JSON the backend
//! sees verbatim.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolKind     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalog)    │    │ (invocation) │    │ (payload)    │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Closed Dispatch
//!
//! Tool names arriving from the backend resolve through [`ToolKind::parse`];
//! an unknown name is a single well-defined `NOT_FOUND` error path, and
//! dispatch over the enum is exhaustive so adding a tool is a compile-time
//! checked change.
//!
//! # Error Classes
//!
//! Validation errors ([`DefaultToolValidator`]) and execution errors carry
//! distinct [`ToolError`] codes so callers and tests can assert on which
//! category fired. No error is ever thrown across the tool boundary; see
//! [`value_objects`].
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions and validation, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for tool execution
//! - **Infrastructure** (`DocsToolbox`): concrete execution over the spec
//!   cache and HTTP fetcher

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolKind, ToolParameter};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
