//! Error handling for the catalog builder.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub mod util;

/// Specialized error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A required source file is absent from the raw directory
    #[error("Missing required source file: {}", path.display())]
    MissingSource {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// Error opening, reading or writing a file
    #[error("IO error while {context}: {source}")]
    Io {
        /// What was being done when the error occurred
        context: String,
        #[source]
        source: io::Error,
    },

    /// Error reading tab-separated source data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing the catalog or the sources lock
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A network retrieval failed or returned a non-success status
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// URL being retrieved
        url: String,
        /// Underlying failure
        message: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error that names the file involved
    pub fn io_at(action: &str, path: &Path, source: io::Error) -> Self {
        Self::io(format!("{action} {}", path.display()), source)
    }

    /// Create a missing source error
    #[must_use]
    pub fn missing_source(path: &Path) -> Self {
        Self::MissingSource {
            path: path.to_path_buf(),
        }
    }

    /// Create a fetch error for a URL
    pub fn fetch(url: &str, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
