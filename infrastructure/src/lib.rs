//! Infrastructure layer for specscout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod backend;
pub mod config;
pub mod logging;
pub mod openapi;
pub mod tools;

// Re-export commonly used types
pub use backend::{BackendSettings, OpenAiChatGateway};
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileAgentConfig, FileBackendConfig, FileConfig,
    FileProviderEntry, Severity, has_errors,
};
pub use logging::JsonlConversationLogger;
pub use openapi::{CacheEntry, HttpSpecSource, SpecCache, StaticSpecSource};
pub use tools::{DEFAULT_PROVIDER, DocsToolbox, JsonSchemaToolConverter, RegistryEntry};
