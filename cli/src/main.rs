//! CLI entrypoint for Specscout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use specscout_application::{AnswerQueryInput, AnswerQueryUseCase, NoProgress, ToolExecutorPort};
use specscout_domain::{AgentPrompt, ToolCall};
use specscout_infrastructure::{
    ConfigLoader, DocsToolbox, FileConfig, HttpSpecSource, JsonSchemaToolConverter,
    JsonlConversationLogger, OpenAiChatGateway, RegistryEntry, Severity, SpecCache, has_errors,
};
use specscout_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Answer "where would my config come from" without running anything
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Surface config problems before any network or model work happens
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => eprintln!("config warning: {}", issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration. Fix the errors above and retry.");
    }

    init_logging(cli.verbose, config.logging.log_dir.as_deref());

    info!("Starting specscout");

    // === Dependency Injection ===
    // Spec fetching and the in-memory cache
    let mut source = HttpSpecSource::with_timeout(Duration::from_secs(config.fetch.timeout_secs));
    if let Some(user_agent) = &config.fetch.user_agent {
        source = source.with_user_agent(user_agent.clone());
    }
    let cache = Arc::new(SpecCache::new());

    // Toolbox over the cache, seeded with the configured provider registry
    let registry: Vec<RegistryEntry> = config
        .providers
        .iter()
        .map(|p| {
            let mut entry = RegistryEntry::new(p.name.clone(), p.openapi_url.clone());
            if let Some(description) = &p.description {
                entry = entry.with_description(description.clone());
            }
            entry
        })
        .collect();
    let toolbox = Arc::new(
        DocsToolbox::new(cache, Arc::new(source))
            .with_registry(registry)
            .with_default_limit(config.agent.search_limit),
    );

    // Chat backend and the agent loop on top of it
    let gateway = Arc::new(OpenAiChatGateway::new(config.backend.settings()));
    let mut use_case = AnswerQueryUseCase::new(
        gateway,
        toolbox.clone(),
        Arc::new(JsonSchemaToolConverter),
        config.agent.params(),
    );
    if let Some(path) = &config.logging.conversation_log {
        if let Some(logger) = JsonlConversationLogger::new(path) {
            use_case = use_case.with_conversation_logger(Arc::new(logger));
        }
    }
    let use_case = Arc::new(use_case);

    if cli.preload {
        preload_providers(&config, &toolbox, cli.quiet).await;
    }

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, toolbox)
            .with_progress(config.repl.show_progress && !cli.quiet);
        if let Some(session) = &cli.session {
            repl = repl.with_session(session.as_str());
        }
        if let Some(history) = &config.repl.history_file {
            repl = repl.with_history_file(history);
        }

        repl.run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let query = match cli.query {
        Some(q) => q,
        None => bail!("A query is required. Use --chat for interactive mode."),
    };

    // Steer the agent toward one provider when asked to
    let query = match &cli.provider {
        Some(provider) => AgentPrompt::with_provider_hint(&query, provider),
        None => query,
    };

    let mut input = AnswerQueryInput::new(query);
    if let Some(session) = &cli.session {
        input = input.with_session(session.as_str());
    }

    // Execute with or without progress reporting
    let answer = if cli.quiet {
        use_case.execute(input, &NoProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&answer),
        OutputFormat::Full => ConsoleFormatter::format(&answer),
        OutputFormat::Json => ConsoleFormatter::format_json(&answer),
    };

    println!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level, with an optional file layer.
///
/// Console diagnostics go to stderr so piped answers stay clean.
fn init_logging(verbosity: u8, log_dir: Option<&str>) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_dir {
        Some(dir) => {
            let _ = std::fs::create_dir_all(dir);
            let file_appender = tracing_appender::rolling::daily(dir, "specscout.log");

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(file_appender),
                )
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Fetch every configured provider spec up front, concurrently.
///
/// Failures are reported and skipped; the agent can still load specs
/// on demand mid-conversation.
async fn preload_providers(config: &FileConfig, toolbox: &Arc<DocsToolbox>, quiet: bool) {
    if config.providers.is_empty() {
        if !quiet {
            println!("No providers configured to preload.");
        }
        return;
    }

    if !quiet {
        println!("Preloading {} provider spec(s)...", config.providers.len());
    }

    let loads = config.providers.iter().map(|p| {
        let call = ToolCall::new("load_spec")
            .with_arg("provider", p.name.clone())
            .with_arg("url", p.openapi_url.clone());
        let toolbox = Arc::clone(toolbox);
        async move { (p.name.clone(), toolbox.execute(&call).await) }
    });

    for (name, result) in futures::future::join_all(loads).await {
        if result.is_success() {
            if !quiet {
                println!("  v {}", name);
            }
        } else {
            let message = result
                .error()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "unknown error".to_string());
            eprintln!("  x {}: {}", name, message);
        }
    }
}
