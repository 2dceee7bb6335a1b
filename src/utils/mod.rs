//! Utility modules for IO and logging

pub mod io;
pub mod logging;

pub use logging::{log_operation_start, log_source_loaded, log_warning};
