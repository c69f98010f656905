//! Spec source port
//!
//! Defines the interface for fetching OpenAPI documents from remote URLs.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a specification document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Server returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Response is not valid JSON: {0}")]
    Decode(String),
}

/// Port for retrieving raw OpenAPI documents.
///
/// Implementations (adapters) live in the infrastructure layer. The
/// returned value is the parsed JSON document, not yet normalized into
/// endpoint records.
#[async_trait]
pub trait SpecSource: Send + Sync {
    /// Fetch and parse the document at `url`.
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}
