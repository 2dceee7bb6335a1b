//! Utility functions for error handling
//!
//! File access helpers that turn IO failures into `CatalogError`s naming the
//! resource involved.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Check that every required source file exists, in order
///
/// The first absent file is reported as `CatalogError::MissingSource`.
pub fn require_files<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Result<()> {
    for path in paths {
        if !path.is_file() {
            return Err(CatalogError::missing_source(path));
        }
    }
    Ok(())
}

/// Safely read a whole file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_bytes(path: &Path, purpose: &str) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CatalogError::missing_source(path)),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    format!("reading {} for {purpose} (permission denied)", path.display())
                }
                _ => format!("reading {} for {purpose}", path.display()),
            };
            Err(CatalogError::io(context, e))
        }
    }
}

/// Write a complete document to a file, creating parent directories
///
/// The content is fully rendered by the caller; this performs a single write.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io_at("creating", parent, e))?;
    }
    fs::write(path, content).map_err(|e| CatalogError::io_at("writing", path, e))
}
