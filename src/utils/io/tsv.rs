//! Tab-separated source decoding
//!
//! BDPM exports are 8-bit Latin text without a header; the beauty-product
//! export is UTF-8 with a header row.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::mem;

use crate::error::Result;
use crate::error::util::safe_read_bytes;

/// Decode ISO-8859-1 bytes into a string
///
/// Each byte maps to the code point of the same value, so 0x80..=0x9F become
/// C1 controls rather than Windows-1252 punctuation. Never fails.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    mem::decode_latin1(bytes).into_owned()
}

/// Create a tab-delimited reader builder with flexible row lengths
#[must_use]
pub fn tsv_reader_builder(has_headers: bool) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(b'\t').has_headers(has_headers).flexible(true);
    builder
}

/// Parse header-less tab-separated text into records
///
/// Rows that cannot be parsed are skipped and logged.
#[must_use]
pub fn parse_tsv_records(text: &str) -> Vec<StringRecord> {
    let mut reader = tsv_reader_builder(false).from_reader(text.as_bytes());
    reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("Skipping unreadable row: {e}");
                None
            }
        })
        .collect()
}

/// Read a Latin-1 tab-separated file into records
pub fn read_latin1_tsv(path: &Path, purpose: &str) -> Result<Vec<StringRecord>> {
    let bytes = safe_read_bytes(path, purpose)?;
    Ok(parse_tsv_records(&decode_latin1(&bytes)))
}

/// Trimmed field at a column, empty when the row is too short
#[must_use]
pub fn field(record: &StringRecord, column: usize) -> &str {
    record.get(column).map_or("", str::trim)
}
