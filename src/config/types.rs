use serde::Deserialize;

/// Main configuration structure for chart-scraper
///
/// Every section and key is optional; missing values fall back to the
/// defaults below, which match the classic IMDb chart layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// HTTP fetching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total time allowed for a single page fetch (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of detail pages fetched at once (0 = unbounded)
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("chart-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_concurrent_fetches: 0,
        }
    }
}

impl FetcherConfig {
    /// Concurrency cap for the fan-out, `None` when unbounded
    pub fn concurrency_limit(&self) -> Option<usize> {
        (self.max_concurrent_fetches > 0).then_some(self.max_concurrent_fetches)
    }
}

/// CSS selectors used to locate chart rows and detail-page fields
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Anchor elements representing chart rows on the seed page
    #[serde(rename = "chart-row")]
    pub chart_row: String,

    /// Element holding "Title (YYYY)"
    pub title: String,

    /// Element holding the decimal rating
    pub rating: String,

    pub summary: String,

    pub duration: String,

    /// Tag links; the last match is not a genre and is dropped
    pub genre: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            chart_row: ".titleColumn a".to_string(),
            title: "div .title_wrapper h1".to_string(),
            rating: "div .ratingValue strong span".to_string(),
            summary: "div .summary_text".to_string(),
            duration: "div .subtext time".to_string(),
            genre: "div .subtext a".to_string(),
        }
    }
}
