//! Progress reporting while a query is answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use specscout_application::ports::progress::QueryProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a terminal spinner
///
/// One spinner tracks the whole query; tool completions are printed
/// above it so they stay visible after the spinner clears.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn ensure_spinner(&self) -> ProgressBar {
        let mut guard = self.spinner.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            return pb.clone();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(100));
        *guard = Some(pb.clone());
        pb
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryProgress for ProgressReporter {
    fn on_model_turn(&self, round: usize) {
        let pb = self.ensure_spinner();
        if round == 0 {
            pb.set_message("Thinking...");
        } else {
            pb.set_message(format!("Thinking (round {})...", round + 1));
        }
    }

    fn on_tool_start(&self, tool: &str, preview: &str) {
        let pb = self.ensure_spinner();
        pb.set_message(format!("{} {}", tool.cyan(), preview.dimmed()));
    }

    fn on_tool_finish(&self, tool: &str, success: bool, duration_ms: u64) {
        if let Some(pb) = self.spinner.lock().unwrap().as_ref() {
            let status = if success {
                format!("  {} {} ({}ms)", "v".green(), tool, duration_ms)
            } else {
                format!("  {} {} ({}ms)", "x".red(), tool, duration_ms)
            };
            pb.println(status);
        }
    }

    fn on_answer_ready(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl QueryProgress for SimpleProgress {
    fn on_model_turn(&self, round: usize) {
        if round == 0 {
            println!("{} Thinking...", "->".cyan());
        } else {
            println!("{} Thinking (round {})...", "->".cyan(), round + 1);
        }
    }

    fn on_tool_start(&self, tool: &str, preview: &str) {
        println!("  {} {} {}", "->".cyan(), tool.bold(), preview.dimmed());
    }

    fn on_tool_finish(&self, tool: &str, success: bool, duration_ms: u64) {
        if success {
            println!("  {} {} ({}ms)", "v".green(), tool, duration_ms);
        } else {
            println!("  {} {} failed ({}ms)", "x".red(), tool, duration_ms);
        }
    }

    fn on_answer_ready(&self) {
        println!();
    }
}
