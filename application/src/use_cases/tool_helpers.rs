//! Shared helpers for tool use cases.

use specscout_domain::tool::entities::ToolCall;

/// Extract a short preview string from tool call arguments.
///
/// Looks for well-known keys (`query`, `url`, `endpoint_id`, `provider`)
/// first, then falls back to the first string value found.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    let keys = ["query", "url", "endpoint_id", "provider"];
    for key in &keys {
        if let Some(serde_json::Value::String(s)) = call.arguments.get(*key) {
            return truncate_preview(s, 50);
        }
    }
    // Fallback: first string value
    for value in call.arguments.values() {
        if let Some(s) = value.as_str() {
            return truncate_preview(s, 50);
        }
    }
    String::new()
}

fn truncate_preview(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_key_preferred() {
        let call = ToolCall::new("load_spec")
            .with_arg("url", "https://petstore3.swagger.io/api/v3/openapi.json")
            .with_arg("other", "ignored");
        assert_eq!(
            tool_args_preview(&call),
            "https://petstore3.swagger.io/api/v3/openapi.json"
        );
    }

    #[test]
    fn test_query_key() {
        let call = ToolCall::new("search_spec").with_arg("query", "list pets");
        assert_eq!(tool_args_preview(&call), "list pets");
    }

    #[test]
    fn test_fallback_to_first_string() {
        let call = ToolCall::new("search_spec").with_arg("needle", "pets");
        assert_eq!(tool_args_preview(&call), "pets");
    }

    #[test]
    fn test_no_string_values() {
        let call = ToolCall::new("search_spec").with_arg("limit", 5);
        assert_eq!(tool_args_preview(&call), "");
    }

    #[test]
    fn test_truncation() {
        let long = "a".repeat(100);
        let call = ToolCall::new("search_spec").with_arg("query", long.as_str());
        let result = tool_args_preview(&call);
        assert!(result.chars().count() <= 50);
        assert!(result.ends_with('…'));
    }
}
