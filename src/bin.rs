//! Binary entry point for `pr-slack-notifier`.
//!
//! This module provides the command-line interface with options for the event
//! source, configuration file path, and logging verbosity.  It initializes
//! logging, runs the notifier once, and reports failures back to the workflow runner.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use pr_slack_notifier::base::{
    config::Config,
    types::Void,
    workflow::{WorkflowContext, failure_command},
};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Pr-slack-notifier – pull request activity as Slack direct messages.
///
/// Inputs come from the GitHub Actions environment (`INPUT_*`, `GITHUB_EVENT_*`,
/// `REVIEWER_LOGIN`), optionally layered over a `config.toml`.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Override the config file path (optional).
    ///
    /// By default, the notifier will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// The webhook event name.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,
    /// Path to the JSON webhook payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,
    /// Log the messages instead of sending them.
    #[arg(long)]
    dry_run: bool,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Main entry point for the notifier binary.
///
/// Any error fails the workflow step with the error message.
#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            println!("{}", failure_command(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Void {
    init_tracing(args.verbose)?;

    let config = Config::load(args.config.as_deref(), args.dry_run)?;
    let context = WorkflowContext::new(args.event_name, args.event_path);

    pr_slack_notifier::start(config, context).await
}

/// Sets up logging based on verbosity, plus OTLP export when an endpoint is configured.
fn init_tracing(verbose: u8) -> Void {
    // Construct the level filter.

    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.

    let stdout = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NONE);

    // Prepare the otlp layer, only when there is somewhere to send spans.

    let otel = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
        let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_simple_exporter(exporter)
            .build()
            .tracer("pr-slack-notifier");
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry().with(otel).with(level_filter).with(stdout).init();

    Ok(())
}
