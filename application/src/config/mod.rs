//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`AgentParams`]: tool loop control (rounds, history trimming)

pub mod agent_params;

pub use agent_params::AgentParams;
