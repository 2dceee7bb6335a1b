//! IO utilities for file operations
//!
//! Source decoding, catalog output and the download manifest.

pub mod catalog;
pub mod lock;
pub mod tsv;

// Re-export commonly used functions for convenience
pub use catalog::{render_catalog, truncate_catalog, write_catalog};
pub use lock::{Downloaded, SourcesLock, write_sources_lock};
pub use tsv::{decode_latin1, read_latin1_tsv};
