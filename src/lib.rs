//! chart-scraper: concurrent chart-page record extraction
//!
//! This crate harvests the detail-page links of a chart page, fetches the
//! first N of them concurrently, extracts a structured record from each and
//! returns the records in chart order.

pub mod config;
pub mod model;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for chart-scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid chart URL {url}: {reason}")]
    InvalidSeedUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No movie record")]
    NoRecords,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selector for {field}: {message}")]
    InvalidSelector { field: &'static str, message: String },
}

/// Result type alias for chart-scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{LinkEntry, Record};
pub use scrape::{fan_out, harvest, scrape_chart, HttpPageAccessor, PageAccessor, ParsedPage};
