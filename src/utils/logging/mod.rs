//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{log_operation_start, log_source_loaded, log_warning};
pub use progress::{create_spinner, finish_and_clear};
