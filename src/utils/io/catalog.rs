//! Catalog JSON output
//!
//! The whole document is rendered in memory before any byte is written, so a
//! failed build never leaves a partial catalog behind.

use std::path::Path;

use crate::error::Result;
use crate::error::util::write_document;
use crate::models::ProductRecord;
use crate::utils::logging::log_operation_start;

/// Keep the first `max_products` records (at least one)
#[must_use]
pub fn truncate_catalog(
    mut products: Vec<ProductRecord>,
    max_products: usize,
) -> Vec<ProductRecord> {
    products.truncate(max_products.max(1));
    products
}

/// Render products as a pretty JSON array with a trailing newline
pub fn render_catalog(products: &[ProductRecord]) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(products)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write products to a catalog file
pub fn write_catalog(path: &Path, products: &[ProductRecord]) -> Result<()> {
    log_operation_start("Writing catalog to", path);
    let rendered = render_catalog(products)?;
    write_document(path, &rendered)
}
