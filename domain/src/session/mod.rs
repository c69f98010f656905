//! Conversation session domain.
//!
//! - [`entities::Conversation`]: a bounded, ordered message history
//! - [`entities::Message`]: a single role-tagged message
//! - [`response::ChatResponse`]: a structured reasoning-backend reply

pub mod entities;
pub mod response;
