//! Output formatter trait

use specscout_application::QueryAnswer;

/// Trait for formatting answered queries
pub trait OutputFormatter {
    /// Format the complete result (answer plus tool and token details)
    fn format(&self, answer: &QueryAnswer) -> String;

    /// Format as JSON
    fn format_json(&self, answer: &QueryAnswer) -> String;

    /// Format the answer text only (concise output)
    fn format_answer_only(&self, answer: &QueryAnswer) -> String;
}
