//! Beauty-product rows to catalog candidates

use super::BeautyProductRow;
use crate::filter::{classify_beauty_tags, split_ingredients};
use crate::models::{CandidateRecord, SourcePriority};

/// Country tag marking products sold in France
pub const FRANCE_TAG: &str = "en:france";

/// Placeholder stock for beauty records, redrawn by synthesis
pub const BEAUTY_PLACEHOLDER_STOCK: u32 = 5;

/// Convert one row into a candidate
///
/// Rows without code or name, not sold in France, or without category tags
/// are dropped.
#[must_use]
pub fn row_to_candidate(row: &BeautyProductRow) -> Option<CandidateRecord> {
    let code = row.code.trim();
    let name = row.product_name.trim();
    if code.is_empty() || name.is_empty() {
        return None;
    }
    if !row.countries_tags.trim().to_lowercase().contains(FRANCE_TAG) {
        return None;
    }
    let category = classify_beauty_tags(&row.categories_tags)?;

    Some(
        CandidateRecord::new(code, name, &row.brands, category, SourcePriority::Beauty)
            .with_ingredients(split_ingredients(&row.ingredients_text).into_vec())
            .with_stock(BEAUTY_PLACEHOLDER_STOCK),
    )
}

/// Candidates for every eligible row, in file order
#[must_use]
pub fn rows_to_candidates(rows: &[BeautyProductRow]) -> Vec<CandidateRecord> {
    rows.iter().filter_map(row_to_candidate).collect()
}
