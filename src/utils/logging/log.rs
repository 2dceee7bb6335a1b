//! Logging utilities
//!
//! This module provides standardized logging functions for pipeline steps.

use std::path::Path;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file or directory being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the outcome of reading one source
///
/// # Arguments
/// * `source` - Short source name
/// * `path` - File that was read
/// * `kept` - Number of rows kept
/// * `skipped` - Number of rows dropped as malformed or filtered
/// * `elapsed` - Time spent reading
pub fn log_source_loaded(
    source: &str,
    path: &Path,
    kept: usize,
    skipped: usize,
    elapsed: Duration,
) {
    log::info!(
        "Loaded {kept} {source} rows from {} in {elapsed:?} ({skipped} skipped)",
        path.display()
    );
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
