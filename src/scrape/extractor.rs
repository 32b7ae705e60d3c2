//! Field extraction for detail pages
//!
//! Every extractor degrades instead of failing: missing elements give empty
//! strings, unparsable numbers give `DEFAULT_YEAR` / `DEFAULT_RATING`.
//! A caller cannot tell a genuine 0.0 rating from a failed parse.

use crate::model::{Record, DEFAULT_RATING, DEFAULT_YEAR};
use crate::scrape::fetcher::ParsedPage;
use crate::scrape::selectors::PageSelectors;
use scraper::{Html, Selector};

/// Builds a record from a parsed detail page
pub fn assemble_record(page: &ParsedPage, selectors: &PageSelectors) -> Record {
    let document = &page.document;
    let (title, release_year) = extract_title_and_year(document, &selectors.title);

    Record {
        title,
        release_year,
        rating: extract_rating(document, &selectors.rating),
        summary: select_text(document, &selectors.summary),
        duration: select_text(document, &selectors.duration),
        genre: extract_genre(document, &selectors.genre),
    }
}

/// Concatenated text of every element matching `selector`, trimmed
pub fn select_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extracts title and release year from a "Title (YYYY)" heading
pub fn extract_title_and_year(document: &Html, selector: &Selector) -> (String, i64) {
    split_title_and_year(&select_text(document, selector))
}

/// Splits "Title (YYYY)" into its parts
///
/// The text must contain exactly one `(`; anything else yields an empty title
/// and `DEFAULT_YEAR`. The last character of the year part is taken to be the
/// closing parenthesis and dropped.
pub fn split_title_and_year(text: &str) -> (String, i64) {
    let parts: Vec<&str> = text.trim().split('(').collect();
    let [title, year] = parts.as_slice() else {
        return (String::new(), DEFAULT_YEAR);
    };

    let mut year = year.trim().chars();
    year.next_back();
    let release_year = year.as_str().trim().parse().unwrap_or(DEFAULT_YEAR);

    (title.trim().to_string(), release_year)
}

/// Extracts the decimal rating
pub fn extract_rating(document: &Html, selector: &Selector) -> f64 {
    parse_rating(&select_text(document, selector))
}

/// Parses a decimal rating, `DEFAULT_RATING` when unparsable or not finite
pub fn parse_rating(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .unwrap_or(DEFAULT_RATING)
}

/// Extracts the genre list from the tag links
pub fn extract_genre(document: &Html, selector: &Selector) -> String {
    let tags: Vec<String> = document
        .select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();
    join_genres(&tags)
}

/// Joins all tags but the last with ", "
///
/// The last tag in the list is a sibling link (the release date), not a genre.
pub fn join_genres(tags: &[String]) -> String {
    match tags.split_last() {
        Some((_, genres)) => genres.join(", "),
        None => String::new(),
    }
}
