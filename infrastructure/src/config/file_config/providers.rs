//! Provider registry entries from TOML (`[[providers]]` array of tables)

use serde::{Deserialize, Serialize};

/// One pre-registered API provider: a name and the URL of its OpenAPI document.
///
/// Entries listed here show up in `list_loaded_providers` before any spec has
/// been fetched, and `--preload` loads them at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProviderEntry {
    /// Provider name used in tool calls (e.g. "petstore")
    pub name: String,
    /// URL of the provider's OpenAPI document
    pub openapi_url: String,
    /// Optional human-readable note shown in provider listings
    #[serde(default)]
    pub description: Option<String>,
}
