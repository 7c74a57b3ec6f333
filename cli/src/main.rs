//! CLI entrypoint for dao-advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::GovernanceAdvisor;
use advisor_infrastructure::{
    ConfigLoader, FileConfig, JsonFileCredentialStore, JsonlAdvisoryLogger, RoutingGateway,
};
use advisor_presentation::{AdvisorStatus, Cli, Command, ConfigCommand, formatter_for};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting dao-advisor");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    // === Dependency Injection ===
    let advisor = build_advisor(&config)?;
    let formatter = formatter_for(cli.output);

    let output = match cli.command {
        Command::Status => {
            formatter.format_status(&AdvisorStatus::from_credentials(&advisor.credentials()))
        }
        Command::Config { command } => match command {
            ConfigCommand::Set(args) => {
                advisor.update_config(args.to_credentials())?;
                formatter.format_status(&AdvisorStatus::from_credentials(&advisor.credentials()))
            }
            ConfigCommand::Clear => {
                advisor.clear_config()?;
                formatter.format_status(&AdvisorStatus::from_credentials(&advisor.credentials()))
            }
            ConfigCommand::Show => formatter.format_credentials(&advisor.credentials()),
            ConfigCommand::Sources => {
                ConfigLoader::print_config_sources();
                return Ok(());
            }
        },
        Command::Analyze(args) => {
            let result = advisor.analyze_proposal(&args.to_request()).await;
            formatter.format_analysis(&result)
        }
        Command::Insights(args) => {
            let request = args.to_request();
            request.validate()?;
            let result = advisor.generate_insights(&request).await;
            formatter.format_insights(&result)
        }
        Command::Suggest(args) => {
            let suggestions = advisor.suggest_improvements(&args.to_request()).await;
            formatter.format_suggestions(&suggestions)
        }
    };

    println!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Console logs go to stderr so that `--output json` stays machine-readable.
/// With `--log-file`, a second non-ANSI layer writes to that file; the returned
/// guard must live until exit so buffered lines are flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file must name a file: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let file_level = if verbose >= 3 { "trace" } else { "debug" };
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn build_advisor(config: &FileConfig) -> Result<GovernanceAdvisor> {
    let credentials_path = ConfigLoader::credentials_path(config).context(
        "Could not determine a config directory; set [storage] credentials_path",
    )?;
    info!("Using credential record {}", credentials_path.display());

    let store = Arc::new(JsonFileCredentialStore::new(credentials_path));
    let gateway = Arc::new(RoutingGateway::from_config(
        &config.providers.to_provider_config(),
    ));
    let mut advisor = GovernanceAdvisor::new(store, gateway);

    if let Some(path) = &config.logging.advisory_log {
        match JsonlAdvisoryLogger::new(path) {
            Some(logger) => advisor = advisor.with_advisory_logger(Arc::new(logger)),
            None => warn!(
                "Advisory log disabled: could not open {}",
                path.display()
            ),
        }
    }

    Ok(advisor)
}
