//! Domain models for the catalog pipeline.

pub mod product;
pub mod types;

pub use product::{CandidateRecord, ProductRecord, SCHEMA_VERSION, UNKNOWN_BRAND};
pub use types::{Category, SourcePriority};
