//! Data types flowing through the scrape pipeline
//!
//! - `LinkEntry`: one chart row, harvested from the seed page
//! - `Record`: the structured fields extracted from one detail page

mod link_entry;
mod record;

pub use link_entry::LinkEntry;
pub use record::{Record, DEFAULT_RATING, DEFAULT_YEAR};
