//! HTTP spec source that fetches OpenAPI documents with `reqwest`.

use async_trait::async_trait;
use specscout_application::ports::spec_source::{FetchError, SpecSource};
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout for spec downloads.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent header sent with spec downloads.
const DEFAULT_USER_AGENT: &str = concat!("specscout/", env!("CARGO_PKG_VERSION"));

/// [`SpecSource`] adapter that downloads documents over HTTP(S).
///
/// Holds a shared `reqwest::Client`; cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpSpecSource {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpSpecSource {
    /// Create a source with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a source with an explicit timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for HttpSpecSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpecSource for HttpSpecSource {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        debug!("Fetching spec from {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(url.to_string())
                } else {
                    FetchError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Spec fetch failed: {} returned {}", url, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// [`SpecSource`] backed by a fixed document, for tests and offline use.
pub struct StaticSpecSource {
    document: serde_json::Value,
}

impl StaticSpecSource {
    pub fn new(document: serde_json::Value) -> Self {
        Self { document }
    }
}

#[async_trait]
impl SpecSource for StaticSpecSource {
    async fn fetch(&self, _url: &str) -> Result<serde_json::Value, FetchError> {
        Ok(self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_returns_document() {
        let source = StaticSpecSource::new(serde_json::json!({"openapi": "3.0.0"}));
        let doc = source.fetch("https://example.com/openapi.json").await.unwrap();
        assert_eq!(doc["openapi"], "3.0.0");
    }

    #[test]
    fn test_user_agent_override() {
        let source = HttpSpecSource::new().with_user_agent("custom-agent/1.0");
        assert_eq!(source.user_agent, "custom-agent/1.0");
    }
}
