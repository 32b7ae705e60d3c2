use serde::Serialize;

/// Year used when the release year cannot be parsed
pub const DEFAULT_YEAR: i64 = 0;

/// Rating used when the rating cannot be parsed
pub const DEFAULT_RATING: f64 = 0.0;

/// One extracted output record
///
/// Serialized field names are part of the output format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub title: String,

    #[serde(rename = "movie_release_year")]
    pub release_year: i64,

    #[serde(rename = "imdb_rating")]
    pub rating: f64,

    pub summary: String,

    pub duration: String,

    pub genre: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            title: String::new(),
            release_year: DEFAULT_YEAR,
            rating: DEFAULT_RATING,
            summary: String::new(),
            duration: String::new(),
            genre: String::new(),
        }
    }
}
