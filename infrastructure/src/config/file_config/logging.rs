//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path for the JSONL conversation transcript; unset disables it
    pub conversation_log: Option<String>,
    /// Directory for tracing file output; unset keeps logs on stderr only
    pub log_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileLoggingConfig::default();
        assert!(config.conversation_log.is_none());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_deserialize() {
        let toml_str = r#"
[logging]
conversation_log = "logs/conversation.jsonl"
log_dir = "/tmp/specscout-logs"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("logs/conversation.jsonl")
        );
        assert_eq!(config.logging.log_dir.as_deref(), Some("/tmp/specscout-logs"));
    }
}
