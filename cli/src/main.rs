//! CLI entrypoint for llm-qa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use qa_application::{AskQuestionUseCase, LlmGateway, NoProgress, ProgressNotifier};
use qa_domain::{Model, Question};
use qa_infrastructure::{ConfigLoader, FileConfig, GeminiError, GeminiLlmGateway};
use qa_presentation::chat::ReedlineReader;
use qa_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter, RunMode, web,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine: hosted environments set variables directly
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting llm-qa");

    let mut config = load_config(&cli);
    if let Some(model) = &cli.model {
        let Ok(model) = model.parse::<Model>();
        config.llm.model = model;
    }
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    if let Err(e) = config.validate() {
        bail!("Invalid configuration: {}", e);
    }

    ConsoleFormatter::set_color_enabled(config.output.color && !cli.no_color);

    // === Dependency Injection ===
    let use_case = AskQuestionUseCase::new(build_gateway(&config));

    match cli.mode() {
        RunMode::Serve => {
            let addr: SocketAddr = config
                .server
                .bind
                .parse()
                .with_context(|| format!("invalid bind address {}", config.server.bind))?;
            web::serve(use_case, addr).await?;
        }
        RunMode::Single(question) => {
            let progress: Box<dyn ProgressNotifier> =
                if cli.quiet || cli.output == OutputFormat::Json {
                    Box::new(NoProgress)
                } else {
                    Box::new(ProgressReporter::new())
                };

            if cli.output == OutputFormat::Text {
                println!(
                    "{}",
                    ConsoleFormatter::format_processing(&Question::new(question.as_str()))
                );
                println!();
            }

            let outcome = use_case
                .execute_with_progress(&question, progress.as_ref())
                .await;

            match cli.output {
                OutputFormat::Text => {
                    println!("{}", ConsoleFormatter::format_answer(&outcome.answer));
                }
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outcome)),
            }
        }
        RunMode::Chat => {
            let history_path = config
                .repl
                .history_file
                .as_ref()
                .map(PathBuf::from)
                .or_else(ReedlineReader::default_history_path);

            ChatRepl::new(use_case)
                .with_model(config.llm.model.to_string())
                .with_progress(config.repl.show_progress && !cli.quiet)
                .run(history_path)
                .await?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level, optionally teeing to a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let Some(path) = &cli.log_file else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(level))
            .with(console)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(console)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}

/// Load configuration, falling back to defaults (plus environment) on error
fn load_config(cli: &Cli) -> FileConfig {
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };

    loaded.unwrap_or_else(|e| {
        warn!("Failed to load configuration: {}. Using defaults.", e);
        ConfigLoader::load_defaults().unwrap_or_default()
    })
}

/// Build the Gemini gateway. A missing key leaves the process running with
/// every question answered by the "unavailable" message.
fn build_gateway(config: &FileConfig) -> Option<Arc<dyn LlmGateway>> {
    match GeminiLlmGateway::from_config(&config.llm) {
        Ok(gateway) => Some(Arc::new(gateway)),
        Err(GeminiError::MissingApiKey) => {
            error!("FATAL: GEMINI_API_KEY not found in environment variables.");
            None
        }
        Err(e) => {
            error!("Error initializing LLM client: {}", e);
            None
        }
    }
}
