//! Catalog algorithms: merging sources and synthesizing commercial fields.

pub mod merge;
pub mod synthesize;

pub use merge::{MergeSummary, merge_records, merge_records_with_summary};
pub use synthesize::{sku_seed, synthesize_all, synthesize_record};
