//! chart-scraper main entry point
//!
//! This is the command-line interface for the chart scraper.

use anyhow::Context;
use chart_scraper::config::{load_config, validate, Config};
use chart_scraper::output::write_records;
use chart_scraper::scrape::scrape_chart;
use chart_scraper::ScrapeError;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// chart-scraper: extract movie records from a chart page
///
/// Fetches the chart page, follows the first ITEMS_COUNT detail links
/// concurrently and prints the extracted records as one JSON line, in chart
/// order.
#[derive(Parser, Debug)]
#[command(name = "chart-scraper")]
#[command(version)]
#[command(about = "Extract movie records from a chart page", long_about = None)]
struct Cli {
    /// URL of the chart page
    #[arg(value_name = "CHART_URL")]
    chart_url: String,

    /// Maximum number of chart entries to scrape
    #[arg(value_name = "ITEMS_COUNT", value_parser = parse_items_count, allow_hyphen_values = true)]
    items_count: usize,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum number of detail pages fetched at once (0 = unbounded)
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Per-page fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parses the item limit, rejecting negative and non-numeric values
fn parse_items_count(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid itemsCount '{}': expected a non-negative integer", value))
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the JSON output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("chart_scraper=info,warn"),
            1 => EnvFilter::new("chart_scraper=debug,info"),
            2 => EnvFilter::new("chart_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(max_concurrent) = cli.max_concurrent {
        config.fetcher.max_concurrent_fetches = max_concurrent;
    }
    if let Some(timeout) = cli.timeout {
        config.fetcher.timeout_secs = timeout;
        config.fetcher.connect_timeout_secs = config.fetcher.connect_timeout_secs.min(timeout);
    }

    validate(&config).context("Invalid command-line overrides")?;
    Ok(config)
}

/// Handles the scrape and prints the records
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;

    tracing::info!(
        "Scraping up to {} entries from {}",
        cli.items_count,
        cli.chart_url
    );

    let records = scrape_chart(&config, &cli.chart_url, cli.items_count)
        .await
        .with_context(|| format!("Failed to scrape chart {}", cli.chart_url))?;

    if records.is_empty() {
        return Err(ScrapeError::NoRecords.into());
    }

    write_records(&records, std::io::stdout().lock()).context("Failed to write output")?;

    tracing::info!("Wrote {} records", records.len());
    Ok(())
}
