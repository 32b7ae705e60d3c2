//! Compiled CSS selectors for chart and detail pages

use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// Every selector the pipeline needs, parsed once and shared by all workers
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub chart_row: Selector,
    pub title: Selector,
    pub rating: Selector,
    pub summary: Selector,
    pub duration: Selector,
    pub genre: Selector,
}

impl PageSelectors {
    /// Parses the configured selector strings
    ///
    /// # Returns
    ///
    /// * `Ok(PageSelectors)` - All selectors parsed
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed,
    ///   named by its configuration key
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            chart_row: compile_one("chart-row", &config.chart_row)?,
            title: compile_one("title", &config.title)?,
            rating: compile_one("rating", &config.rating)?,
            summary: compile_one("summary", &config.summary)?,
            duration: compile_one("duration", &config.duration)?,
            genre: compile_one("genre", &config.genre)?,
        })
    }
}

#[cfg(test)]
impl Default for PageSelectors {
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).expect("built-in selectors parse")
    }
}

fn compile_one(field: &'static str, source: &str) -> Result<Selector, ConfigError> {
    Selector::parse(source).map_err(|e| ConfigError::InvalidSelector {
        field,
        message: format!("'{}': {:?}", source, e),
    })
}
