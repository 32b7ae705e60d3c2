use std::fmt;
use url::Url;

/// A detail-page link harvested from the chart page
///
/// `position` is the 0-based order of appearance on the chart page and is the
/// only key used to put results back in chart order. `display_name` is kept
/// for logging only; chart pages may repeat a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Order of appearance on the chart page
    pub position: usize,

    /// Absolute URL of the detail page
    pub url: Url,

    /// Visible anchor text
    pub display_name: String,
}

impl LinkEntry {
    pub fn new(position: usize, url: Url, display_name: impl Into<String>) -> Self {
        Self {
            position,
            url,
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for LinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {:?} ({})", self.position, self.display_name, self.url)
    }
}
