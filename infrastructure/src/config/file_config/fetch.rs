//! Spec fetching configuration from TOML (`[fetch]` section)

use serde::{Deserialize, Serialize};

/// Raw spec-fetch configuration from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Timeout for one spec download, in seconds
    pub timeout_secs: u64,
    /// Override for the User-Agent header sent with spec downloads
    pub user_agent: Option<String>,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: None,
        }
    }
}
