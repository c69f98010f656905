//! Endpoint catalog entities
//!
//! An [`EndpointRecord`] is the normalized, provider-scoped representation of
//! one `(path, method)` operation from an OpenAPI document. Records are built
//! once at load time, including their human-readable [`content`](EndpointRecord::content)
//! rendering, and are immutable afterwards.

use serde::{Deserialize, Serialize};

/// HTTP verbs recognized when walking an OpenAPI `paths` object.
///
/// Keys under a path that are not one of these (e.g. `parameters`, `$ref`,
/// vendor extensions) are not operations and are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// All recognized verbs, in the order they are documented.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Parse a verb case-insensitively. Returns `None` for non-verb keys.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            "HEAD" => Some(HttpMethod::Head),
            "OPTIONS" => Some(HttpMethod::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::core::error::DomainError::InvalidMethod(s.to_string()))
    }
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointParameter {
    /// Parameter name
    pub name: String,
    /// Where the parameter lives ("query", "path", "header", "body", ...)
    pub location: String,
    /// Whether the parameter is required
    pub required: bool,
    /// Parameter description (empty when the spec has none)
    pub description: String,
    /// Raw schema object from the spec, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl EndpointParameter {
    pub fn new(name: impl Into<String>, location: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            required,
            description: String::new(),
            schema: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Request body summary for an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared media types (e.g. "application/json")
    #[serde(default)]
    pub content_types: Vec<String>,
}

/// One response entry: status code plus its description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResponseEntry {
    pub fn new(code: impl Into<String>, description: Option<String>) -> Self {
        Self {
            code: code.into(),
            description,
        }
    }
}

/// Deterministic endpoint id: `provider:path:METHOD`.
///
/// Stable across reloads of the same spec; this is the external reference a
/// tool caller hands back to fetch endpoint detail.
pub fn endpoint_id(provider: &str, path: &str, method: HttpMethod) -> String {
    format!("{}:{}:{}", provider, path, method.as_str())
}

/// A normalized API endpoint and its pre-rendered documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Unique id within a provider, `provider:path:METHOD`
    pub id: String,
    /// Provider identifier under which this endpoint is cached
    pub provider: String,
    /// Route template, e.g. `/pets/{id}`
    pub path: String,
    pub method: HttpMethod,
    /// Human label; falls back to `"{METHOD} {path}"` without a spec summary
    pub title: String,
    /// Raw operation summary, when the spec provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Operation description (empty when the spec has none)
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<EndpointParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: Vec<ResponseEntry>,
    /// Raw examples object from the spec, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<serde_json::Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub deprecated: bool,
    /// Markdown-like rendering of the fields above, generated once at load
    #[serde(default)]
    pub content: String,
}

impl EndpointRecord {
    pub fn new(provider: impl Into<String>, path: impl Into<String>, method: HttpMethod) -> Self {
        let provider = provider.into();
        let path = path.into();
        Self {
            id: endpoint_id(&provider, &path, method),
            title: format!("{} {}", method.as_str(), path),
            provider,
            path,
            method,
            summary: None,
            description: String::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
            examples: None,
            tags: Vec::new(),
            deprecated: false,
            content: String::new(),
        }
    }

    /// Set the spec summary; also becomes the title.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.title = summary.clone();
        self.summary = Some(summary);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<EndpointParameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_request_body(mut self, body: RequestBody) -> Self {
        self.request_body = Some(body);
        self
    }

    pub fn with_responses(mut self, responses: Vec<ResponseEntry>) -> Self {
        self.responses = responses;
        self
    }

    pub fn with_examples(mut self, examples: serde_json::Value) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Render and store the `content` field. Call once, after all other
    /// fields are set.
    pub fn rendered(mut self) -> Self {
        self.content = self.render_content();
        self
    }

    /// Render the human-readable documentation for this endpoint.
    ///
    /// Sections appear in a fixed order, each (including individual bullet
    /// lines) separated by a blank line; omitted sections leave no header
    /// behind.
    pub fn render_content(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        parts.push(format!("**Endpoint:** {} {}", self.method, self.path));

        if let Some(summary) = &self.summary {
            parts.push(format!("**Summary:** {}", summary));
        }

        if !self.description.is_empty() {
            parts.push(format!("**Description:** {}", self.description));
        }

        if !self.parameters.is_empty() {
            parts.push("**Parameters:**".to_string());
            for param in &self.parameters {
                let mut line = format!("- `{}` ({})", param.name, param.location);
                if param.required {
                    line.push_str(" *required*");
                }
                if !param.description.is_empty() {
                    line.push_str(": ");
                    line.push_str(&param.description);
                }
                parts.push(line);
            }
        }

        if let Some(body) = &self.request_body {
            parts.push("**Request Body:**".to_string());
            if let Some(description) = &body.description {
                parts.push(description.clone());
            }
            if !body.content_types.is_empty() {
                parts.push(format!("Content-Types: {}", body.content_types.join(", ")));
            }
        }

        if !self.responses.is_empty() {
            parts.push("**Responses:**".to_string());
            for response in &self.responses {
                parts.push(format!(
                    "- `{}`: {}",
                    response.code,
                    response.description.as_deref().unwrap_or("No description")
                ));
            }
        }

        if self.deprecated {
            parts.push(
                "⚠️ **DEPRECATED** - This endpoint is deprecated and may be removed in future versions."
                    .to_string(),
            );
        }

        parts.join("\n\n")
    }
}
