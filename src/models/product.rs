//! Product records
//!
//! `CandidateRecord` is what the record builders emit and the merger works
//! on. `ProductRecord` is the public catalog entry produced by synthesis.

use serde::{Deserialize, Serialize};

use super::types::{Category, SourcePriority};

/// Schema tag written on every catalog entry
pub const SCHEMA_VERSION: &str = "0.0.0";

/// Brand used when the source has none
pub const UNKNOWN_BRAND: &str = "Unknown";

/// A catalog entry as emitted in the JSON output
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub schema_version: String,
    pub sku: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub contraindication_tags: Vec<String>,
    pub price_eur: f64,
    pub in_stock: bool,
    pub stock_qty: u32,
}

/// A record built from one source row, before merge and synthesis
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    pub sku: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    /// Source price, `None` when it needs synthesis
    pub price_eur: Option<f64>,
    /// Placeholder quantity, always redrawn by synthesis
    pub stock_qty: u32,
    pub source: SourcePriority,
}

impl CandidateRecord {
    /// Create a candidate with an empty ingredient list and no price
    #[must_use]
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        brand: &str,
        category: Category,
        source: SourcePriority,
    ) -> Self {
        let brand = brand.trim();
        Self {
            sku: sku.into(),
            name: name.into(),
            brand: if brand.is_empty() {
                UNKNOWN_BRAND.to_string()
            } else {
                brand.to_string()
            },
            category,
            ingredients: Vec::new(),
            price_eur: None,
            stock_qty: 0,
            source,
        }
    }

    /// Set the source price
    #[must_use]
    pub fn with_price(mut self, price_eur: Option<f64>) -> Self {
        self.price_eur = price_eur;
        self
    }

    /// Set the placeholder stock quantity
    #[must_use]
    pub const fn with_stock(mut self, stock_qty: u32) -> Self {
        self.stock_qty = stock_qty;
        self
    }

    /// Set the ingredient list
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Whether the price must be drawn by the synthesizer
    #[must_use]
    pub fn needs_price(&self) -> bool {
        !matches!(self.price_eur, Some(price) if price > 0.0)
    }

    /// Finish the record with synthesized commercial fields
    ///
    /// Drops the source tag, which is not part of the public record.
    #[must_use]
    pub fn into_product(self, price_eur: f64, stock_qty: u32) -> ProductRecord {
        ProductRecord {
            schema_version: SCHEMA_VERSION.to_string(),
            sku: self.sku,
            name: self.name,
            brand: self.brand,
            category: self.category,
            ingredients: self.ingredients,
            contraindication_tags: Vec::new(),
            price_eur,
            in_stock: stock_qty > 0,
            stock_qty,
        }
    }
}
