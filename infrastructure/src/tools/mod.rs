//! Documentation tools exposed to the reasoning backend
//!
//! This module provides the concrete tool executor ([`DocsToolbox`]) that
//! serves the four documentation tools over the in-memory spec cache, and
//! the schema converter that renders their catalog for the chat API.

pub mod schema;
pub mod toolbox;

pub use schema::JsonSchemaToolConverter;
pub use toolbox::{DEFAULT_PROVIDER, DocsToolbox, RegistryEntry};
