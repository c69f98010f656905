//! Reasoning backend configuration from TOML (`[backend]` section)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::BackendSettings;

/// Raw backend configuration from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible server.
    pub base_url: String,
    /// Model requested for completions.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Completion token budget per request.
    pub max_tokens: u32,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 3000,
            request_timeout_secs: 120,
        }
    }
}

impl FileBackendConfig {
    /// The API key to use: the direct value when set, otherwise the
    /// environment variable named by `api_key_env`. Empty values count as
    /// absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    /// Build the gateway settings for this configuration.
    pub fn settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.base_url.clone(),
            api_key: self.resolve_api_key(),
            api_key_env: self.api_key_env.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileBackendConfig::default();
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 3000);
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_direct_key_wins_over_env() {
        let config = FileBackendConfig {
            api_key: Some("sk-direct".to_string()),
            ..FileBackendConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-direct"));
    }

    #[test]
    fn test_blank_direct_key_counts_as_absent() {
        let config = FileBackendConfig {
            api_key: Some("   ".to_string()),
            // An env var name that cannot plausibly be set
            api_key_env: "SPECSCOUT_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..FileBackendConfig::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_settings_carry_timeout() {
        let config = FileBackendConfig {
            request_timeout_secs: 30,
            ..FileBackendConfig::default()
        };
        let settings = config.settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.model, "gpt-4o-mini");
    }
}
