//! Page accessor: HTTP fetching and HTML parsing
//!
//! This module handles every network request the scraper makes:
//! - Building the HTTP client from the fetcher configuration
//! - GET requests for the chart page and each detail page
//! - Turning non-success statuses and transport failures into errors
//!
//! Each page is fetched once. Retrying is left to the caller.

use crate::config::FetcherConfig;
use crate::ScrapeError;
use reqwest::Client;
use scraper::Html;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A fetched and parsed HTML document
///
/// Owned by the worker that fetched it until extraction consumes it.
#[derive(Debug)]
pub struct ParsedPage {
    /// The URL the page was requested from
    pub url: Url,

    /// The parsed document
    pub document: Html,
}

impl ParsedPage {
    /// Parses an HTML body fetched from `url`
    pub fn parse(url: Url, body: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(body),
        }
    }
}

/// Retrieves and parses pages
///
/// Any error returned is terminal for that page. Implementations must be
/// shareable across worker tasks.
pub trait PageAccessor: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<ParsedPage, ScrapeError>> + Send;
}

/// `PageAccessor` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpPageAccessor {
    client: Client,
}

impl HttpPageAccessor {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the fetcher configuration and wraps it
    pub fn from_config(config: &FetcherConfig) -> Result<Self, ScrapeError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl PageAccessor for HttpPageAccessor {
    async fn fetch(&self, url: &Url) -> Result<ParsedPage, ScrapeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::trace!("Fetched {} ({} bytes)", url, body.len());

        // Parse only after the last await so the future stays Send
        Ok(ParsedPage::parse(url.clone(), &body))
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use chart_scraper::config::FetcherConfig;
/// use chart_scraper::scrape::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}
