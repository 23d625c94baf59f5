//! JSON result sink
//!
//! The crawl's only output format: a pretty-printed JSON array of listing
//! records. Serialization failure is a programmer-error class of failure
//! (records are plain string fields) and propagates fatally rather than
//! being recovered.

use crate::extract::Listing;
use crate::Result;
use std::io::Write;

/// Serializes listings as an indented JSON array
///
/// Key order within each record is fixed by the [`Listing`] field order:
/// title, url, year, consumption, description, price.
pub fn to_json(listings: &[Listing]) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(listings)
}

/// Serializes listings and writes them to `writer` with a trailing newline
pub fn write_json<W: Write>(mut writer: W, listings: &[Listing]) -> Result<()> {
    let json = to_json(listings)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}
