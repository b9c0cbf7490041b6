//! CLI entrypoint for support-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use scout_application::{
    FetchArticleInput, FetchArticleUseCase, NoProgress, ProgressNotifier, RetrievalConfig,
    SearchArticlesInput, SearchArticlesUseCase, ToolExecutorPort, ToolSchemaPort,
};
use scout_domain::{ConfigIssue, RetrievalError, ToolCall};
use scout_infrastructure::{
    ConfigLoader, ConfigSources, FileConfig, HttpArticleFetcher, HttpSupportToolExecutor,
    JsonSchemaToolConverter, TavilySearchClient, support_tool_spec,
};
use scout_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, SimpleProgress, SpinnerProgress, formatter_for,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting support-scout");

    if cli.show_config {
        println!("{}", ConfigSources::discover(cli.config.as_deref()).describe());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let file_config = load_config(cli.config.as_deref(), cli.no_config)?;
    ConsoleFormatter::set_color_enabled(file_config.output.color);
    let show_progress = !cli.quiet && file_config.output.show_progress;
    let config = file_config.to_retrieval_config();

    // === Cancellation ===
    let cancellation = CancellationToken::new();
    let trigger = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling outstanding request");
            trigger.cancel();
        }
    });

    let progress: Box<dyn ProgressNotifier> = if !show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SimpleProgress)
    };

    match command {
        Command::Search {
            query,
            max_results,
            domains,
            anywhere,
            format,
        } => {
            let mut input = SearchArticlesInput::new(query);
            if let Some(n) = max_results {
                input = input.with_max_results(n);
            }
            if anywhere {
                input = input.unrestricted();
            } else if !domains.is_empty() {
                input = input.with_domains(domains);
            }
            run_search(&config, input, format, cancellation, progress.as_ref()).await
        }
        Command::Fetch {
            url,
            max_chars,
            format,
        } => {
            let mut input = FetchArticleInput::new(url);
            if let Some(n) = max_chars {
                input = input.with_max_chars(n);
            }
            run_fetch(&config, input, format, cancellation, progress.as_ref()).await
        }
        Command::Call { tool, args } => run_tool_call(&config, &tool, &args, cancellation).await,
        Command::Tools { json } => {
            list_tools(&config, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

/// Load, validate and report on configuration
fn load_config(path: Option<&Path>, no_config: bool) -> Result<FileConfig> {
    let loaded = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(path)
    };
    let file_config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    let issues = file_config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_issues(&issues));
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration (see --show-config for file locations)");
    }

    debug!(
        "Configuration loaded (support domain: {}, search endpoint: {})",
        file_config.support.domain, file_config.search.api_url
    );
    Ok(file_config)
}

async fn run_search(
    config: &RetrievalConfig,
    input: SearchArticlesInput,
    format: OutputFormat,
    cancellation: CancellationToken,
    progress: &dyn ProgressNotifier,
) -> Result<ExitCode> {
    let backend = Arc::new(TavilySearchClient::new(&config.search)?);
    let use_case =
        SearchArticlesUseCase::new(backend, config.clone()).with_cancellation(cancellation);

    match use_case.execute_with_progress(input, progress).await {
        Ok(envelope) => {
            println!("{}", formatter_for(format).format_search(&envelope));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report(&e)),
    }
}

async fn run_fetch(
    config: &RetrievalConfig,
    input: FetchArticleInput,
    format: OutputFormat,
    cancellation: CancellationToken,
    progress: &dyn ProgressNotifier,
) -> Result<ExitCode> {
    let source = Arc::new(HttpArticleFetcher::new(&config.fetch)?);
    let use_case = FetchArticleUseCase::new(source, config.clone()).with_cancellation(cancellation);

    match use_case.execute_with_progress(input, progress).await {
        Ok(article) => {
            println!("{}", formatter_for(format).format_article(&article));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report(&e)),
    }
}

async fn run_tool_call(
    config: &RetrievalConfig,
    tool: &str,
    args: &str,
    cancellation: CancellationToken,
) -> Result<ExitCode> {
    let arguments: serde_json::Value =
        serde_json::from_str(args).context("--args must be valid JSON")?;
    let call = ToolCall::from_json(tool, arguments).map_err(|e| anyhow!(e))?;

    let executor = HttpSupportToolExecutor::from_config(config)?.with_cancellation(cancellation);
    let result = executor.execute(&call).await;

    print!("{}", ConsoleFormatter::format_tool_result(&result));
    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn list_tools(config: &RetrievalConfig, json: bool) -> Result<()> {
    let spec = support_tool_spec(config);

    if json {
        let schemas = JsonSchemaToolConverter.all_tools_schema(&spec);
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    let mut names: Vec<&str> = spec.names().collect();
    names.sort_unstable();
    for name in names {
        if let Some(tool) = spec.get(name) {
            println!("{}", ConsoleFormatter::format_tool(tool, &spec.aliases_for(name)));
        }
    }
    Ok(())
}

fn report(error: &RetrievalError) -> ExitCode {
    eprintln!("{}", ConsoleFormatter::format_error(error));
    if error.is_cancelled() {
        ExitCode::from(130)
    } else {
        ExitCode::FAILURE
    }
}
