//! A Rust library for building a small deterministic OTC demo catalog from the
//! French BDPM drug registry and the Open Beauty Facts product export.
//!
//! The pipeline reads both sources, keeps only non-prescription consumer items,
//! merges them by SKU, synthesizes missing prices and stock from a seed and
//! writes the result as a JSON array.

pub mod algorithm;
pub mod async_io;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod registry;
pub mod utils;

// Re-export the most common types for easier use
pub use catalog::{BuildStats, build_demo_catalog, build_products};
pub use config::{CatalogConfig, SourceConfig};
pub use error::{CatalogError, Result};
pub use models::{CandidateRecord, Category, ProductRecord, SourcePriority};

// Source seams
pub use registry::RegistryLoader;
pub use registry::obf::{BeautyFallback, NoFallback};

// Network collaborator
pub use async_io::{HttpFetcher, download_sources};
