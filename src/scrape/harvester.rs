//! Link harvesting for chart pages
//!
//! Chart rows are anchors matched by the `chart-row` selector. Each one
//! becomes a `LinkEntry` whose position is its order among accepted rows.

use crate::model::LinkEntry;
use crate::ScrapeError;
use scraper::{Html, Selector};
use url::Url;

/// Extracts the ordered chart entries from a seed document
///
/// Links are resolved against the origin (scheme, host and port) of
/// `seed_url`. Rows without an `href`, or whose `href` does not resolve to an
/// http(s) URL, are skipped and take no position. A skipped row therefore
/// does not use up a slot of the item limit: the first N entries are the
/// first N rows with a usable link. An empty chart yields an empty list.
///
/// # Example
///
/// ```
/// use chart_scraper::scrape::harvest;
/// use scraper::{Html, Selector};
/// use url::Url;
///
/// let html = r#"<table><tr><td class="titleColumn"><a href="/title/tt1/">One</a></td></tr></table>"#;
/// let document = Html::parse_document(html);
/// let seed = Url::parse("https://www.imdb.com/chart/top").unwrap();
/// let rows = Selector::parse(".titleColumn a").unwrap();
///
/// let entries = harvest(&document, &seed, &rows);
/// assert_eq!(entries[0].url.as_str(), "https://www.imdb.com/title/tt1/");
/// ```
pub fn harvest(document: &Html, seed_url: &Url, row_selector: &Selector) -> Vec<LinkEntry> {
    let origin = match origin_of(seed_url) {
        Ok(origin) => origin,
        Err(e) => {
            tracing::warn!("Cannot resolve chart links: {}", e);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for element in document.select(row_selector) {
        let display_name = element.text().collect::<String>().trim().to_string();

        let Some(href) = element.value().attr("href") else {
            tracing::debug!("Skipping chart row {:?} without href", display_name);
            continue;
        };

        let Some(url) = resolve_link(href, &origin) else {
            tracing::debug!("Skipping chart row {:?} with unusable href {:?}", display_name, href);
            continue;
        };

        entries.push(LinkEntry::new(entries.len(), url, display_name));
    }

    entries
}

/// Reduces a URL to its origin, e.g. `https://host:port/`
pub fn origin_of(url: &Url) -> Result<Url, ScrapeError> {
    if url.host_str().is_none() {
        return Err(ScrapeError::InvalidSeedUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }

    let mut origin = url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    Ok(origin)
}

/// Resolves a row href to an absolute http(s) URL
fn resolve_link(href: &str, origin: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let url = origin.join(href).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
