//! Progress notification port
//!
//! Defines the interface for reporting progress while a query is answered.

/// Callback for progress updates during query execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait QueryProgress: Send + Sync {
    /// Called before each request to the reasoning backend
    fn on_model_turn(&self, round: usize);

    /// Called when a tool call starts
    fn on_tool_start(&self, tool: &str, preview: &str);

    /// Called when a tool call finishes
    fn on_tool_finish(&self, tool: &str, success: bool, duration_ms: u64);

    /// Called once the final answer is available
    fn on_answer_ready(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QueryProgress for NoProgress {
    fn on_model_turn(&self, _round: usize) {}
    fn on_tool_start(&self, _tool: &str, _preview: &str) {}
    fn on_tool_finish(&self, _tool: &str, _success: bool, _duration_ms: u64) {}
}
