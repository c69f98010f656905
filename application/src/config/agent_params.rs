//! Agent parameters: use case loop control.
//!
//! [`AgentParams`] groups the static parameters that control the
//! tool loop in [`AnswerQueryUseCase`](crate::use_cases::answer_query::AnswerQueryUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Tool loop control parameters.
///
/// Controls how many tool rounds a single query may consume and how much
/// conversation history a session retains between queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentParams {
    /// Maximum number of tool rounds for a single query.
    pub max_tool_rounds: usize,
    /// Message count above which session history is trimmed.
    pub history_limit: usize,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            max_tool_rounds: 5,
            history_limit: 20,
        }
    }
}

impl AgentParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tool_rounds(mut self, max: usize) -> Self {
        self.max_tool_rounds = max;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
