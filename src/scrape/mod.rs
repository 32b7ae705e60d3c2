//! Scrape module: chart harvesting and concurrent record extraction
//!
//! This module contains the core pipeline, including:
//! - HTTP page access and HTML parsing
//! - Chart link harvesting
//! - Per-field extraction with fallback defaults
//! - Concurrent fan-out with chart-order restoration

mod extractor;
mod fetcher;
mod harvester;
mod scheduler;
mod selectors;

pub use extractor::{
    assemble_record, extract_genre, extract_rating, extract_title_and_year, join_genres,
    parse_rating, select_text, split_title_and_year,
};
pub use fetcher::{build_http_client, HttpPageAccessor, PageAccessor, ParsedPage};
pub use harvester::{harvest, origin_of};
pub use scheduler::fan_out;
pub use selectors::PageSelectors;

use crate::config::Config;
use crate::model::Record;
use crate::ScrapeError;
use std::sync::Arc;
use url::Url;

/// Runs a complete scrape of one chart page
///
/// This is the main entry point. It will:
/// 1. Validate the chart URL and compile the configured selectors
/// 2. Build the HTTP page accessor
/// 3. Fetch the chart page and harvest its links
/// 4. Fetch and extract the first `items_count` detail pages concurrently
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `chart_url` - URL of the chart (seed) page
/// * `items_count` - Maximum number of chart entries to process
///
/// # Returns
///
/// * `Ok(Vec<Record>)` - Records in chart order; failed entries are omitted
/// * `Err(ScrapeError)` - The chart URL is invalid or the chart page could
///   not be fetched
pub async fn scrape_chart(
    config: &Config,
    chart_url: &str,
    items_count: usize,
) -> Result<Vec<Record>, ScrapeError> {
    let seed_url = parse_seed_url(chart_url)?;
    let selectors = PageSelectors::compile(&config.selectors)?;
    let accessor = HttpPageAccessor::from_config(&config.fetcher)?;

    scrape_chart_with(
        Arc::new(accessor),
        Arc::new(selectors),
        &seed_url,
        items_count,
        config.fetcher.concurrency_limit(),
    )
    .await
}

/// Runs a scrape with a caller-supplied page accessor
///
/// A failure to fetch the chart page is fatal; detail-page failures only
/// drop the affected entries.
pub async fn scrape_chart_with<A>(
    accessor: Arc<A>,
    selectors: Arc<PageSelectors>,
    seed_url: &Url,
    items_count: usize,
    max_concurrent: Option<usize>,
) -> Result<Vec<Record>, ScrapeError>
where
    A: PageAccessor + 'static,
{
    tracing::info!("Fetching chart page {}", seed_url);

    let entries = {
        let seed_page = accessor.fetch(seed_url).await?;
        harvest(&seed_page.document, seed_url, &selectors.chart_row)
    };

    tracing::info!("Harvested {} chart entries", entries.len());

    Ok(fan_out(accessor, selectors, &entries, items_count, max_concurrent).await)
}

/// Parses the chart URL, accepting only http(s) URLs with a host
pub fn parse_seed_url(chart_url: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(chart_url.trim())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScrapeError::InvalidSeedUrl {
            url: chart_url.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    origin_of(&url)?;
    Ok(url)
}
