//! Documentation toolbox: the concrete implementation of [`ToolExecutorPort`].
//!
//! [`DocsToolbox`] owns the four documentation tools the reasoning backend
//! can call: `load_spec`, `search_spec`, `get_endpoint_detail` and
//! `list_loaded_providers`. Every call is validated against its declared
//! schema before dispatch, and every failure crosses this boundary as a
//! structured error payload rather than an `Err`; the backend can only
//! react to what lands in the conversation.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::json;
use specscout_application::ports::spec_source::{FetchError, SpecSource};
use specscout_application::ports::tool_executor::ToolExecutorPort;
use specscout_domain::tool::traits::{DefaultToolValidator, ToolValidator};
use specscout_domain::{
    DEFAULT_LIMIT, EndpointRecord, HttpMethod, RankedEndpoint, ToolCall, ToolDefinition, ToolError,
    ToolKind, ToolParameter, ToolResult, clamp_limit, rank,
};
use tracing::debug;

use crate::openapi::{CacheEntry, SpecCache, normalize};

/// Provider that callers see without loading anything: a configured name
/// plus the spec URL it would be loaded from.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Provider name used when the caller does not give one.
pub const DEFAULT_PROVIDER: &str = "dynamic";

/// Tool executor backed by the in-memory spec cache.
pub struct DocsToolbox {
    cache: Arc<SpecCache>,
    source: Arc<dyn SpecSource>,
    registry: Vec<RegistryEntry>,
    default_limit: usize,
    definitions: Vec<ToolDefinition>,
}

impl DocsToolbox {
    pub fn new(cache: Arc<SpecCache>, source: Arc<dyn SpecSource>) -> Self {
        Self {
            cache,
            source,
            registry: Vec::new(),
            default_limit: DEFAULT_LIMIT,
            definitions: catalog(),
        }
    }

    /// Register configured providers reported by `list_loaded_providers`
    /// alongside whatever has been loaded dynamically.
    pub fn with_registry(mut self, registry: Vec<RegistryEntry>) -> Self {
        self.registry = registry;
        self
    }

    /// Result count used when a search call does not pass `limit`.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = clamp_limit(Some(limit as i64));
        self
    }

    async fn execute_inner(&self, call: &ToolCall) -> ToolResult {
        let Some(kind) = ToolKind::parse(&call.tool_name) else {
            let names: Vec<&str> = self.definitions.iter().map(|d| d.name.as_str()).collect();
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("tool '{}'", call.tool_name))
                    .with_suggestion(format!("Available tools: {}", names.join(", "))),
            );
        };
        let Some(definition) = self.definitions.iter().find(|d| d.name == call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("tool '{}'", call.tool_name)),
            );
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e));
        }

        match kind {
            ToolKind::LoadSpec => self.load_spec(call).await,
            ToolKind::SearchSpec => self.search_spec(call),
            ToolKind::GetEndpointDetail => self.endpoint_detail(call),
            ToolKind::ListProviders => self.list_providers(),
        }
    }

    /// `load_spec`: fetch, normalize and cache a spec. The cache is only
    /// touched once the whole document has normalized, so a failed reload
    /// leaves any previous entry for the provider intact.
    async fn load_spec(&self, call: &ToolCall) -> ToolResult {
        let url = match call.require_string("url") {
            Ok(url) => url,
            Err(e) => return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e)),
        };
        let provider = call.get_string("provider").unwrap_or(DEFAULT_PROVIDER);

        let document = match self.source.fetch(url).await {
            Ok(document) => document,
            Err(e) => return ToolResult::failure(&call.tool_name, fetch_error(e)),
        };
        let records = match normalize(provider, &document) {
            Ok(records) => records,
            Err(e) => {
                return ToolResult::failure(&call.tool_name, ToolError::invalid_spec(e.to_string()));
            }
        };

        let total = records.len();
        let sample: Vec<serde_json::Value> = records.iter().take(5).map(summarize).collect();
        self.cache.put(provider, records, url);

        let payload = json!({
            "status": "success",
            "provider": provider,
            "url": url,
            "total_endpoints": total,
            "sample_endpoints": sample,
        });
        let mut result = ToolResult::success(&call.tool_name, payload.to_string());
        result.metadata.endpoint_count = Some(total);
        result
    }

    /// `search_spec`: rank a loaded provider's endpoints against a query.
    fn search_spec(&self, call: &ToolCall) -> ToolResult {
        let query = match call.require_string("query") {
            Ok(query) => query,
            Err(e) => return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e)),
        };
        let provider = call.get_string("provider").unwrap_or(DEFAULT_PROVIDER);
        let Some(entry) = self.cache.get(provider) else {
            return ToolResult::failure(&call.tool_name, ToolError::provider_not_loaded(provider));
        };

        // "all" is not a verb, so it falls through to no filter.
        let method_filter = call.get_string("method").and_then(HttpMethod::parse);
        let limit = clamp_limit(Some(
            call.get_i64("limit").unwrap_or(self.default_limit as i64),
        ));

        let ranked = rank(&entry.endpoints, query, method_filter);
        let total_found = ranked.len();
        let showing = total_found.min(limit);
        debug!(
            "Search '{}' in '{}' matched {} endpoints",
            query, provider, total_found
        );

        let results: Vec<serde_json::Value> = ranked
            .iter()
            .take(limit)
            .map(summarize_ranked)
            .collect();
        let payload = json!({
            "status": "success",
            "provider": provider,
            "query": query,
            "method_filter": method_filter.map(|m| m.as_str()).unwrap_or("all"),
            "total_found": total_found,
            "showing": showing,
            "results": results,
        });
        let mut result = ToolResult::success(&call.tool_name, payload.to_string());
        result.metadata.match_count = Some(total_found);
        result
    }

    /// `get_endpoint_detail`: one full endpoint record by id.
    fn endpoint_detail(&self, call: &ToolCall) -> ToolResult {
        let endpoint_id = match call.require_string("endpoint_id") {
            Ok(id) => id,
            Err(e) => return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e)),
        };
        let provider = call.get_string("provider").unwrap_or(DEFAULT_PROVIDER);
        let Some(entry) = self.cache.get(provider) else {
            return ToolResult::failure(&call.tool_name, ToolError::provider_not_loaded(provider));
        };
        let Some(record) = entry.find(endpoint_id) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!(
                    "endpoint '{}' in provider '{}'",
                    endpoint_id, provider
                ))
                .with_suggestion("Use search_spec to discover endpoint ids for this provider"),
            );
        };

        let endpoint = match serde_json::to_value(record) {
            Ok(endpoint) => endpoint,
            Err(e) => {
                return ToolResult::failure(
                    &call.tool_name,
                    ToolError::execution_failed(format!("Failed to serialize endpoint: {}", e)),
                );
            }
        };
        let payload = json!({
            "status": "success",
            "endpoint": endpoint,
        });
        ToolResult::success(&call.tool_name, payload.to_string())
    }

    /// `list_loaded_providers`: configured registry entries merged with the
    /// in-memory cache. A registry name that has been loaded is reported
    /// once, from the cache, where it has real endpoint counts.
    fn list_providers(&self) -> ToolResult {
        let mut providers: Vec<serde_json::Value> = Vec::new();
        for entry in &self.registry {
            if self.cache.get(&entry.name).is_some() {
                continue;
            }
            let mut listed = json!({
                "name": entry.name,
                "source": "registry",
                "endpoint_count": 0,
                "openapi_url": entry.url,
            });
            if let Some(description) = &entry.description {
                listed["description"] = json!(description);
            }
            providers.push(listed);
        }
        for name in self.cache.provider_names() {
            if let Some(entry) = self.cache.get(&name) {
                providers.push(json!({
                    "name": name,
                    "source": "in-memory cache",
                    "endpoint_count": entry.endpoints.len(),
                    "openapi_url": entry.source_url,
                }));
            }
        }

        let payload = json!({
            "status": "success",
            "total_providers": providers.len(),
            "providers": providers,
        });
        ToolResult::success(ToolKind::ListProviders.name(), payload.to_string())
    }
}

#[async_trait]
impl ToolExecutorPort for DocsToolbox {
    fn definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();
        let mut result = self.execute_inner(call).await;
        if result.metadata.duration_ms.is_none() {
            result.metadata.duration_ms = Some(started.elapsed().as_millis() as u64);
        }
        result
    }
}

/// The fixed tool catalog, in the order the backend sees it.
fn catalog() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            ToolKind::LoadSpec.name(),
            "Fetch an OpenAPI document from a URL and cache its endpoints in memory for searching",
        )
        .with_parameter(ToolParameter::new(
            "url",
            "URL of the OpenAPI JSON document",
            true,
        ))
        .with_parameter(ToolParameter::new(
            "provider",
            "Name to cache the spec under (defaults to 'dynamic')",
            false,
        )),
        ToolDefinition::new(
            ToolKind::SearchSpec.name(),
            "Search a loaded provider's endpoints by keyword, ranked by relevance",
        )
        .with_parameter(ToolParameter::new("query", "Free-text search query", true))
        .with_parameter(ToolParameter::new(
            "provider",
            "Provider to search (defaults to 'dynamic')",
            false,
        ))
        .with_parameter(
            ToolParameter::new("method", "Restrict results to one HTTP method", false)
                .with_allowed_values([
                    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "all",
                ]),
        )
        .with_parameter(
            ToolParameter::new("limit", "Maximum number of results", false).with_type("integer"),
        ),
        ToolDefinition::new(
            ToolKind::GetEndpointDetail.name(),
            "Get the full documentation for one endpoint by its id",
        )
        .with_parameter(ToolParameter::new(
            "endpoint_id",
            "Endpoint id as returned by search_spec (provider:path:METHOD)",
            true,
        ))
        .with_parameter(ToolParameter::new(
            "provider",
            "Provider the endpoint belongs to (defaults to 'dynamic')",
            false,
        )),
        ToolDefinition::new(
            ToolKind::ListProviders.name(),
            "List configured providers and providers loaded in the in-memory cache",
        ),
    ]
}

fn fetch_error(err: FetchError) -> ToolError {
    match err {
        FetchError::Decode(message) => ToolError::invalid_spec(message)
            .with_suggestion("Check that the URL serves an OpenAPI document as JSON"),
        other => ToolError::fetch_failed(other.to_string())
            .with_suggestion("Check that the URL is reachable and try again"),
    }
}

fn summarize(record: &EndpointRecord) -> serde_json::Value {
    json!({
        "id": record.id,
        "method": record.method.as_str(),
        "path": record.path,
        "title": record.title,
    })
}

fn summarize_ranked(ranked: &RankedEndpoint<'_>) -> serde_json::Value {
    let mut value = summarize(ranked.endpoint);
    value["relevance_score"] = json!(ranked.relevance());
    value
}
