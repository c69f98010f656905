//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("Orchestration error: {0}")]
    OrchestrationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_display() {
        let error = DomainError::UnknownTool("delete_spec".to_string());
        assert_eq!(error.to_string(), "Unknown tool: delete_spec");
    }

    #[test]
    fn test_invalid_method_display() {
        let error = DomainError::InvalidMethod("FETCH".to_string());
        assert_eq!(error.to_string(), "Invalid HTTP method: FETCH");
    }
}
