//! Configuration file loading for specscout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SPECSCOUT_*` environment overrides
//! 2. `--config <path>` specified file
//! 3. Project root: `./specscout.toml` or `./.specscout.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/specscout/config.toml`
//! 5. Fallback: `~/.config/specscout/config.toml`
//! 6. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileAgentConfig, FileBackendConfig, FileConfig, FileFetchConfig, FileLoggingConfig,
    FileProviderEntry, FileReplConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
