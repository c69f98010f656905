//! Chat REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw chat-mode configuration from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show spinner while a query is being answered
    pub show_progress: bool,
    /// Path to the readline history file (defaults to the user data dir)
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileReplConfig::default();
        assert!(config.show_progress);
        assert!(config.history_file.is_none());
    }

    #[test]
    fn test_deserialize() {
        let toml_str = r#"
[repl]
show_progress = false
history_file = "/tmp/specscout_history"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("/tmp/specscout_history")
        );
    }
}
