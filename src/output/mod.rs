//! Output module for serializing scraped records
//!
//! Records are written as a single-line JSON array so the output can be
//! piped straight into other tools.

use crate::model::Record;
use crate::ScrapeError;
use std::io::Write;

/// Serializes records as a compact JSON array
pub fn to_json_line(records: &[Record]) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string(records)?)
}

/// Writes records to `writer` as one JSON line
///
/// # Arguments
///
/// * `records` - The records to write, already in output order
/// * `writer` - Destination, usually standard output
///
/// # Returns
///
/// * `Ok(())` - The line was written and flushed
/// * `Err(ScrapeError)` - Serialization or the write failed
pub fn write_records<W: Write>(records: &[Record], mut writer: W) -> Result<(), ScrapeError> {
    let line = to_json_line(records)?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}
