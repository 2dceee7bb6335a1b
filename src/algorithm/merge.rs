//! SKU-keyed merge of registry and beauty candidates
//!
//! Registry candidates go in first. On a SKU collision the record with the
//! higher [`SourcePriority`] owns identity, name, brand, category, price and
//! stock; the other one can only fill an empty ingredient list. Output is
//! sorted ascending by SKU.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::{CandidateRecord, SourcePriority};

/// Counters describing one merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub registry_inserted: usize,
    pub beauty_inserted: usize,
    pub collisions: usize,
    pub enriched: usize,
    pub skipped_empty_sku: usize,
}

/// Merge candidates from both sources into a sorted, duplicate-free list
#[must_use]
pub fn merge_records(
    registry: Vec<CandidateRecord>,
    beauty: Vec<CandidateRecord>,
) -> Vec<CandidateRecord> {
    merge_records_with_summary(registry, beauty).0
}

/// Merge candidates and report what happened
#[must_use]
pub fn merge_records_with_summary(
    registry: Vec<CandidateRecord>,
    beauty: Vec<CandidateRecord>,
) -> (Vec<CandidateRecord>, MergeSummary) {
    let mut summary = MergeSummary::default();
    let mut by_sku: FxHashMap<String, CandidateRecord> =
        FxHashMap::with_capacity_and_hasher(registry.len() + beauty.len(), Default::default());

    for mut record in registry {
        let sku = record.sku.trim().to_string();
        if sku.is_empty() {
            summary.skipped_empty_sku += 1;
            continue;
        }
        record.sku.clone_from(&sku);
        by_sku.insert(sku, record);
        summary.registry_inserted += 1;
    }

    for mut record in beauty {
        let sku = record.sku.trim().to_string();
        if sku.is_empty() {
            summary.skipped_empty_sku += 1;
            continue;
        }
        record.sku.clone_from(&sku);
        if let Some(existing) = by_sku.get_mut(&sku) {
            summary.collisions += 1;
            if record.source > existing.source {
                std::mem::swap(existing, &mut record);
            }
            log::trace!(
                "SKU {sku}: keeping {} record over {}",
                existing.source,
                record.source
            );
            if existing.ingredients.is_empty() && !record.ingredients.is_empty() {
                existing.ingredients = record.ingredients;
                summary.enriched += 1;
            }
            continue;
        }
        by_sku.insert(sku, record);
        summary.beauty_inserted += 1;
    }

    let merged = by_sku
        .into_values()
        .sorted_unstable_by(|a, b| a.sku.cmp(&b.sku))
        .collect_vec();

    log::debug!(
        "Merged {} records: {} from {}, {} from {}, {} collisions, {} enriched",
        merged.len(),
        summary.registry_inserted,
        SourcePriority::Registry,
        summary.beauty_inserted,
        SourcePriority::Beauty,
        summary.collisions,
        summary.enriched
    );
    (merged, summary)
}
