//! Open Beauty Facts export
//!
//! The export is tab-separated UTF-8 with a header row; columns are addressed
//! by name. Only the first `row_limit` data rows are consumed. When the local
//! file is missing the rows are fetched through a [`BeautyFallback`].

pub mod conversion;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Instant;

use csv::StringRecord;
use serde::Deserialize;

use crate::config::OBF_FILE;
use crate::error::{CatalogError, Result};
use crate::models::CandidateRecord;
use crate::registry::RegistryLoader;
use crate::utils::io::tsv::tsv_reader_builder;
use crate::utils::logging::{log_source_loaded, log_warning};

/// Header-addressed columns consumed from the export
pub const OBF_COLUMNS: [&str; 6] = [
    "code",
    "product_name",
    "brands",
    "countries_tags",
    "ingredients_text",
    "categories_tags",
];

/// One beauty-product row; absent columns read as empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BeautyProductRow {
    pub code: String,
    pub product_name: String,
    pub brands: String,
    pub countries_tags: String,
    pub ingredients_text: String,
    pub categories_tags: String,
}

/// Source of beauty-product lines when the local export is missing
///
/// Implementations return at most `max_lines` lines, header first. A failed
/// retrieval is an error, not an empty result.
pub trait BeautyFallback: Send + Sync {
    /// Retrieve up to `max_lines` lines of the export at `url`
    fn fetch_lines(&self, url: &str, max_lines: usize) -> Result<Vec<String>>;
}

/// A fallback that always fails, for offline builds
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl BeautyFallback for NoFallback {
    fn fetch_lines(&self, url: &str, _max_lines: usize) -> Result<Vec<String>> {
        Err(CatalogError::fetch(url, "network fallback is disabled"))
    }
}

/// Consumed columns absent from a header row; they read as empty strings
#[must_use]
pub fn missing_columns(headers: &StringRecord) -> Vec<&'static str> {
    OBF_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h.trim() == *column))
        .collect()
}

/// Parse beauty-product rows from a reader, consuming at most `limit` data rows
///
/// Rows that fail to decode are skipped but still count toward the limit.
pub fn parse_beauty_rows<R: io::Read>(input: R, limit: usize) -> Result<Vec<BeautyProductRow>> {
    let mut reader = tsv_reader_builder(true).from_reader(input);

    let headers = reader.headers()?;
    let missing = missing_columns(headers);
    if !headers.is_empty() && !missing.is_empty() {
        log_warning(
            &format!("Beauty-product header lacks columns {}", missing.join(", ")),
            None,
        );
    }

    let mut rows = Vec::new();
    let mut unreadable = 0usize;
    for (idx, row) in reader.deserialize::<BeautyProductRow>().enumerate() {
        if idx >= limit {
            break;
        }
        match row {
            Ok(row) => rows.push(row),
            Err(e) => {
                unreadable += 1;
                log::trace!("Skipping unreadable beauty-product row {idx}: {e}");
            }
        }
    }
    if unreadable > 0 {
        log::debug!("Skipped {unreadable} unreadable beauty-product rows");
    }
    Ok(rows)
}

/// Load beauty-product rows from a local file, or through the fallback
pub fn load_beauty_rows(
    path: &Path,
    fallback: &dyn BeautyFallback,
    url: &str,
    limit: usize,
) -> Result<Vec<BeautyProductRow>> {
    if path.is_file() {
        let file = File::open(path).map_err(|e| CatalogError::io_at("opening", path, e))?;
        return parse_beauty_rows(BufReader::new(file), limit);
    }

    log_warning("Beauty-product file not found, fetching from network", Some(path));
    let lines = fallback.fetch_lines(url, limit.saturating_add(2))?;
    if lines.is_empty() {
        return Ok(Vec::new());
    }
    parse_beauty_rows(lines.join("\n").as_bytes(), limit)
}

/// Loader for the beauty-product export
pub struct ObfRegistry<'a> {
    fallback: &'a dyn BeautyFallback,
    url: String,
    row_limit: usize,
}

impl<'a> ObfRegistry<'a> {
    /// Create a loader with a fallback, its URL and a row limit
    #[must_use]
    pub fn new(fallback: &'a dyn BeautyFallback, url: impl Into<String>, row_limit: usize) -> Self {
        Self {
            fallback,
            url: url.into(),
            row_limit,
        }
    }
}

impl RegistryLoader for ObfRegistry<'_> {
    fn get_register_name(&self) -> &'static str {
        "obf"
    }

    fn required_files(&self) -> &'static [&'static str] {
        &[]
    }

    fn load(&self, raw_dir: &Path) -> Result<Vec<CandidateRecord>> {
        let path = raw_dir.join(OBF_FILE);
        let start = Instant::now();
        let rows = load_beauty_rows(&path, self.fallback, &self.url, self.row_limit)?;
        let candidates = conversion::rows_to_candidates(&rows);
        log_source_loaded(
            "beauty-product",
            &path,
            candidates.len(),
            rows.len() - candidates.len(),
            start.elapsed(),
        );
        Ok(candidates)
    }
}
