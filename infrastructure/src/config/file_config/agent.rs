//! Agent loop configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};
use specscout_application::AgentParams;

/// Raw agent loop configuration from TOML
///
/// # Example
///
/// ```toml
/// [agent]
/// max_tool_rounds = 5
/// history_limit = 20
/// search_limit = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Tool rounds allowed per query before the loop is cut short
    pub max_tool_rounds: usize,
    /// Conversation trim threshold, in messages
    pub history_limit: usize,
    /// Search result count used when a tool call omits `limit`
    pub search_limit: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: 5,
            history_limit: 20,
            search_limit: 10,
        }
    }
}

impl FileAgentConfig {
    /// Build the use-case parameters for this configuration.
    pub fn params(&self) -> AgentParams {
        AgentParams::default()
            .with_max_tool_rounds(self.max_tool_rounds)
            .with_history_limit(self.history_limit)
    }
}
