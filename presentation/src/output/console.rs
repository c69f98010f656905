//! Console output formatter for answered queries

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use specscout_application::QueryAnswer;
use std::collections::HashMap;

/// Formats answered queries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result with tool and token details
    pub fn format(answer: &QueryAnswer) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Specscout Answer"));
        output.push('\n');

        // The answer itself
        output.push_str(&answer.answer);
        output.push('\n');

        // Tools the model consulted
        if !answer.tools_used.is_empty() {
            output.push_str(&format!("\n{}\n", "Tools used:".cyan().bold()));
            for line in Self::tool_usage_lines(&answer.tools_used) {
                output.push_str(&format!("  * {}\n", line));
            }
        }

        // Accounting
        if let Some(model) = &answer.model {
            output.push_str(&format!("\n{} {}", "Model:".dimmed(), model));
        }
        output.push_str(&format!(
            "\n{} {}",
            "Tool rounds:".dimmed(),
            answer.tool_rounds
        ));
        output.push_str(&format!(
            "\n{} {} ({} prompt, {} completion)",
            "Tokens:".dimmed(),
            answer.usage.total_tokens,
            answer.usage.prompt_tokens,
            answer.usage.completion_tokens
        ));
        // "stop" is the normal case; only abnormal finishes get a line.
        if answer.finish_reason != "stop" {
            output.push_str(&format!(
                "\n{} {}",
                "Finish:".dimmed(),
                answer.finish_reason
            ));
        }
        output.push_str(&format!(
            "\n{} {}\n",
            "Session:".dimmed(),
            answer.session_id
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(answer: &QueryAnswer) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the answer text only (concise output, good for piping)
    pub fn format_answer_only(answer: &QueryAnswer) -> String {
        answer.answer.clone()
    }

    /// Collapse repeated tool names into `name (Nx)` entries,
    /// keeping first-use order.
    fn tool_usage_lines(tools_used: &[String]) -> Vec<String> {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tool in tools_used {
            if !counts.contains_key(tool.as_str()) {
                order.push(tool);
            }
            *counts.entry(tool.as_str()).or_insert(0) += 1;
        }

        order
            .into_iter()
            .map(|name| {
                let count = counts[name];
                if count > 1 {
                    format!("{} ({}x)", name, count)
                } else {
                    name.to_string()
                }
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, answer: &QueryAnswer) -> String {
        Self::format(answer)
    }

    fn format_json(&self, answer: &QueryAnswer) -> String {
        Self::format_json(answer)
    }

    fn format_answer_only(&self, answer: &QueryAnswer) -> String {
        Self::format_answer_only(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specscout_domain::TokenUsage;

    fn answer_fixture() -> QueryAnswer {
        QueryAnswer {
            answer: "Use GET /pets to list pets.".to_string(),
            session_id: "default".to_string(),
            tools_used: vec![
                "load_spec".to_string(),
                "search_spec".to_string(),
                "search_spec".to_string(),
            ],
            tool_rounds: 2,
            usage: TokenUsage::new(120, 45, 165),
            model: Some("gpt-4o-mini".to_string()),
            finish_reason: "stop".to_string(),
        }
    }

    #[test]
    fn test_tool_usage_lines_collapse_repeats() {
        let lines = ConsoleFormatter::tool_usage_lines(&[
            "load_spec".to_string(),
            "search_spec".to_string(),
            "search_spec".to_string(),
        ]);
        assert_eq!(lines, vec!["load_spec", "search_spec (2x)"]);
    }

    #[test]
    fn test_tool_usage_lines_keep_first_use_order() {
        let lines = ConsoleFormatter::tool_usage_lines(&[
            "search_spec".to_string(),
            "get_endpoint_detail".to_string(),
            "search_spec".to_string(),
        ]);
        assert_eq!(lines, vec!["search_spec (2x)", "get_endpoint_detail"]);
    }

    #[test]
    fn test_format_answer_only_is_just_the_text() {
        let answer = answer_fixture();
        assert_eq!(
            ConsoleFormatter::format_answer_only(&answer),
            "Use GET /pets to list pets."
        );
    }

    #[test]
    fn test_format_json_round_trips() {
        let answer = answer_fixture();
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&answer)).unwrap();
        assert_eq!(json["answer"], "Use GET /pets to list pets.");
        assert_eq!(json["tool_rounds"], 2);
        assert_eq!(json["usage"]["total_tokens"], 165);
        assert_eq!(json["finish_reason"], "stop");
    }

    #[test]
    fn test_format_includes_tools_and_accounting() {
        let answer = answer_fixture();
        let text = ConsoleFormatter::format(&answer);
        assert!(text.contains("Use GET /pets to list pets."));
        assert!(text.contains("load_spec"));
        assert!(text.contains("search_spec (2x)"));
        assert!(text.contains("165"));
        // A normal stop is not worth a line of its own.
        assert!(!text.contains("Finish:"));
    }

    #[test]
    fn test_format_flags_abnormal_finish() {
        let mut answer = answer_fixture();
        answer.finish_reason = "length".to_string();
        let text = ConsoleFormatter::format(&answer);
        assert!(text.contains("Finish:"));
        assert!(text.contains("length"));
    }
}
