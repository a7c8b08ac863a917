//! CLI entry point for the tickets analyzer.
//!
//! Reads a tickets JSON file, selects one route and prints the per-carrier
//! minimum flight time together with the average and median flight time.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsStr;
use std::path::Path;
use tickets_analyzer::{
    analyzers::aggregate::summarize_route,
    config::Settings,
    loader::{parse_document, read_source},
    output::{not_found_message, render_report},
    parser::parse_tickets,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "tickets_analyzer")]
#[command(about = "Flight time statistics for one route of a tickets file", long_about = None)]
struct Cli {
    /// Path to the tickets JSON file (a leading `~` expands to the home directory)
    #[arg(value_name = "FILE")]
    source: String,

    /// Origin airport code; requires DESTINATION
    #[arg(value_name = "ORIGIN", requires = "destination")]
    origin: Option<String>,

    /// Destination airport code; requires ORIGIN
    #[arg(value_name = "DESTINATION", requires = "origin")]
    destination: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = Path::new(&settings.log_file_path);
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("tickets_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    run(&cli, &settings)
}

/// Loads, parses, filters and reports. Any error returned here is fatal.
#[tracing::instrument(skip_all, fields(source = %cli.source))]
fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let route = settings.route(cli.origin.clone(), cli.destination.clone());

    let text = read_source(&cli.source)?;
    let root = parse_document(&text)?;
    let parsed = parse_tickets(&root).context("invalid tickets document")?;

    info!(
        parsed = parsed.tickets.len(),
        skipped = parsed.skipped.len(),
        route = %route,
        "Tickets loaded"
    );

    let Some(summary) = summarize_route(&parsed.tickets, &route) else {
        println!("{}", not_found_message(&route));
        return Ok(());
    };

    print!("{}", render_report(&summary));

    Ok(())
}
