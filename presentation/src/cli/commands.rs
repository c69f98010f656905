//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answered queries
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Only the answer text
    Answer,
    /// Answer plus tool and token details
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for specscout
#[derive(Parser, Debug)]
#[command(name = "specscout")]
#[command(author, version, about = "API documentation agent backed by OpenAPI specs")]
#[command(long_about = r#"
Specscout answers questions about HTTP APIs by reading their OpenAPI documents.

Each query runs a tool loop against the reasoning backend:
1. Your question is sent together with the documentation tool catalog
2. The model loads and searches specs as needed (load_spec, search_spec,
   get_endpoint_detail, list_loaded_providers)
3. The final answer is printed, by default as plain text

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./specscout.toml      Project-level config
3. ~/.config/specscout/config.toml   Global config

Example:
  specscout "How do I create a pet in the petstore API?"
  specscout --provider github "Which endpoint lists repository issues?"
  specscout --chat --preload
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Session id to record the exchange under
    #[arg(long, value_name = "ID")]
    pub session: Option<String>,

    /// Provider the question is about (hints the model at the right spec)
    #[arg(short, long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Load every configured provider's spec before the first query
    #[arg(long)]
    pub preload: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "answer")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
