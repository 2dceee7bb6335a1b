//! Async network retrieval of catalog sources
//!
//! This is the only part of the crate that touches the network: a download
//! command and the beauty-product fallback used during builds.

pub mod download;
pub mod fetch;

pub use download::download_sources;
pub use fetch::HttpFetcher;
