//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use specscout_application::{AnswerQueryInput, AnswerQueryUseCase, NoProgress, ToolExecutorPort};
use specscout_domain::util::truncate_str;
use specscout_domain::{Role, ToolCall};
use std::path::PathBuf;
use std::sync::Arc;

/// Session id used for every exchange of one chat run.
const CHAT_SESSION: &str = "chat";

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: Arc<AnswerQueryUseCase>,
    tools: Arc<dyn ToolExecutorPort>,
    session_id: String,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: Arc<AnswerQueryUseCase>, tools: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            use_case,
            tools,
            session_id: CHAT_SESSION.to_string(),
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Continue a specific session instead of the default one
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Override the readline history file location
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("specscout").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome().await;

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Answer the question
                    self.process_query(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn print_welcome(&self) {
        let status = self.use_case.status().await;

        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Specscout - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", status.model);
        println!();
        println!("Commands:");
        println!("  /help       - Show this help");
        println!("  /providers  - Show configured and loaded providers");
        println!("  /history    - Show this session's messages");
        println!("  /clear      - Reset the session");
        println!("  /status     - Show agent status");
        println!("  /quit       - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /providers       - Show configured and loaded providers");
                println!("  /history         - Show this session's messages");
                println!("  /clear           - Reset the session");
                println!("  /status          - Show agent status");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/providers" => {
                self.show_providers().await;
                false
            }
            "/history" => {
                self.show_history().await;
                false
            }
            "/clear" => {
                if self.use_case.clear_session(&self.session_id).await {
                    println!("Session cleared.");
                } else {
                    println!("Session was already empty.");
                }
                false
            }
            "/status" => {
                let status = self.use_case.status().await;
                println!();
                println!("Agent:    {}", status.agent_id);
                println!("Model:    {}", status.model);
                println!("Sessions: {}", status.total_sessions);
                println!("Messages: {}", status.total_messages);
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn show_providers(&self) {
        let result = self
            .tools
            .execute(&ToolCall::new("list_loaded_providers"))
            .await;

        let payload = result
            .output()
            .and_then(|o| serde_json::from_str::<serde_json::Value>(o).ok());
        let Some(payload) = payload else {
            eprintln!(
                "Error: {}",
                result
                    .error()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "could not list providers".to_string())
            );
            return;
        };

        println!();
        let providers = payload["providers"].as_array().cloned().unwrap_or_default();
        if providers.is_empty() {
            println!("No providers configured or loaded yet.");
            println!("Ask about an API or use load_spec via a question to get started.");
        } else {
            for provider in &providers {
                let name = provider["name"].as_str().unwrap_or("?");
                let source = provider["source"].as_str().unwrap_or("?");
                let count = provider["endpoint_count"].as_u64().unwrap_or(0);
                let line = if source == "registry" {
                    format!("  {} ({})", name.bold(), source)
                } else {
                    format!("  {} ({}, {} endpoints)", name.bold(), source, count)
                };
                println!("{}", line);
                if let Some(description) = provider["description"].as_str() {
                    println!("      {}", description.dimmed());
                }
                if let Some(url) = provider["openapi_url"].as_str() {
                    println!("      {}", url.dimmed());
                }
            }
        }
        println!();
    }

    async fn show_history(&self) {
        let messages = self.use_case.history(&self.session_id, 20).await;

        println!();
        if messages.is_empty() {
            println!("No messages in this session yet.");
        } else {
            for message in &messages {
                let label = match message.role {
                    Role::System => "system".dimmed(),
                    Role::User => "you".cyan().bold(),
                    Role::Assistant => "agent".green().bold(),
                    Role::Tool => "tool".yellow(),
                };
                println!("[{}] {}", label, truncate_str(&message.content, 100));
            }
        }
        println!();
    }

    async fn process_query(&self, query: &str) {
        println!();

        let input = AnswerQueryInput::new(query).with_session(self.session_id.as_str());

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute(input, &progress).await
        } else {
            self.use_case.execute(input, &NoProgress).await
        };

        match result {
            Ok(answer) => {
                println!("{}", ConsoleFormatter::format_answer_only(&answer));
                if !answer.tools_used.is_empty() {
                    println!(
                        "{}",
                        format!("[tools: {}]", answer.tools_used.join(", ")).dimmed()
                    );
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
