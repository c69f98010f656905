//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the settings types the
//! rest of the application consumes.

mod agent;
mod backend;
mod fetch;
mod logging;
mod providers;
mod repl;

pub use agent::FileAgentConfig;
pub use backend::FileBackendConfig;
pub use fetch::FileFetchConfig;
pub use logging::FileLoggingConfig;
pub use providers::FileProviderEntry;
pub use repl::FileReplConfig;

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use specscout_domain::MAX_LIMIT;
use std::collections::HashSet;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat backend settings (endpoint, model, sampling)
    pub backend: FileBackendConfig,
    /// Agent loop settings
    pub agent: FileAgentConfig,
    /// Spec download settings
    pub fetch: FileFetchConfig,
    /// Conversation transcript settings
    pub logging: FileLoggingConfig,
    /// Chat REPL settings
    pub repl: FileReplConfig,
    /// Pre-registered providers (`[[providers]]` tables)
    pub providers: Vec<FileProviderEntry>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Backend request parameters (sampling range, token budget, timeout)
    /// 2. Agent loop bounds (tool rounds, history window, search limit)
    /// 3. Spec download settings
    /// 4. Provider registry entries (names, URLs, duplicates)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Backend request parameters
        if !(0.0..=2.0).contains(&self.backend.temperature) {
            issues.push(invalid_value(
                "backend.temperature",
                self.backend.temperature,
                format!(
                    "backend.temperature: {} is outside the usual 0.0-2.0 sampling range",
                    self.backend.temperature
                ),
            ));
        }
        if self.backend.max_tokens == 0 {
            issues.push(invalid_value(
                "backend.max_tokens",
                0,
                "backend.max_tokens: 0 leaves no room for a completion".to_string(),
            ));
        }
        if self.backend.request_timeout_secs == 0 {
            issues.push(invalid_value(
                "backend.request_timeout_secs",
                0,
                "backend.request_timeout_secs: 0 would time out every request".to_string(),
            ));
        }
        if !is_http_url(&self.backend.base_url) {
            issues.push(invalid_value(
                "backend.base_url",
                &self.backend.base_url,
                format!(
                    "backend.base_url: '{}' does not look like an HTTP(S) URL",
                    self.backend.base_url
                ),
            ));
        }

        // 2. Agent loop bounds
        if self.agent.max_tool_rounds == 0 {
            issues.push(invalid_value(
                "agent.max_tool_rounds",
                0,
                "agent.max_tool_rounds: 0 prevents the agent from ever consulting a spec"
                    .to_string(),
            ));
        }
        if self.agent.history_limit < 2 {
            issues.push(invalid_value(
                "agent.history_limit",
                self.agent.history_limit,
                format!(
                    "agent.history_limit: {} cannot hold a query and its answer",
                    self.agent.history_limit
                ),
            ));
        }
        if self.agent.search_limit == 0 || self.agent.search_limit > MAX_LIMIT {
            issues.push(invalid_value(
                "agent.search_limit",
                self.agent.search_limit,
                format!(
                    "agent.search_limit: {} is outside the supported 1-{} range",
                    self.agent.search_limit, MAX_LIMIT
                ),
            ));
        }

        // 3. Spec download settings
        if self.fetch.timeout_secs == 0 {
            issues.push(invalid_value(
                "fetch.timeout_secs",
                0,
                "fetch.timeout_secs: 0 would time out every spec download".to_string(),
            ));
        }

        // 4. Provider registry entries
        let mut seen_names = HashSet::new();
        for (idx, entry) in self.providers.iter().enumerate() {
            let name = entry.name.trim();
            if name.is_empty() {
                issues.push(missing_value(
                    "providers.name",
                    format!("providers[{}]: entry has an empty name", idx),
                ));
            } else if !seen_names.insert(name) {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::Duplicate {
                        field: "providers.name".to_string(),
                        value: name.to_string(),
                    },
                    message: format!("providers: name '{}' appears more than once", name),
                });
            }

            let url = entry.openapi_url.trim();
            if url.is_empty() {
                issues.push(missing_value(
                    "providers.openapi_url",
                    format!("providers[{}]: entry has an empty openapi_url", idx),
                ));
            } else if !is_http_url(url) {
                issues.push(invalid_value(
                    "providers.openapi_url",
                    url,
                    format!(
                        "providers[{}]: '{}' does not look like an HTTP(S) URL",
                        idx, url
                    ),
                ));
            }
        }

        issues
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn invalid_value(field: &str, value: impl std::fmt::Display, message: String) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Warning,
        code: ConfigIssueCode::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        },
        message,
    }
}

fn missing_value(field: &str, message: String) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        code: ConfigIssueCode::MissingValue {
            field: field.to_string(),
        },
        message,
    }
}
