//! Deterministic synthesis of commercial fields
//!
//! Every record reseeds its own generator from `sku_seed(sku) ^ seed` before
//! drawing, so values depend only on the `(sku, seed)` pair and not on the
//! position of the record in the catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::models::{CandidateRecord, ProductRecord};

/// Lowest synthesized price, in cents (inclusive)
pub const MIN_PRICE_CENTS: u32 = 300;
/// Highest synthesized price, in cents (exclusive)
pub const MAX_PRICE_CENTS: u32 = 2000;
/// Lowest synthesized stock quantity (inclusive)
pub const MIN_STOCK: u32 = 1;
/// Highest synthesized stock quantity (inclusive)
pub const MAX_STOCK: u32 = 24;

/// 48-bit value from the first six bytes of the SKU's SHA-256
#[must_use]
pub fn sku_seed(sku: &str) -> u64 {
    let digest = Sha256::digest(sku.as_bytes());
    digest[..6]
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

/// Generator for one record
#[must_use]
pub fn record_rng(sku: &str, seed: u64) -> StdRng {
    StdRng::seed_from_u64(sku_seed(sku) ^ seed)
}

/// Draw a price in [3.00, 20.00) with cent precision
pub fn draw_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.random_range(MIN_PRICE_CENTS..MAX_PRICE_CENTS)) / 100.0
}

/// Draw a stock quantity in [1, 24]
pub fn draw_stock<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(MIN_STOCK..=MAX_STOCK)
}

/// Fill price and stock for one candidate
///
/// The price is drawn only when missing or non-positive; stock is always
/// drawn, after the price.
#[must_use]
pub fn synthesize_record(candidate: CandidateRecord, seed: u64) -> ProductRecord {
    let mut rng = record_rng(&candidate.sku, seed);
    let price = match candidate.price_eur {
        Some(price) if price > 0.0 => price,
        _ => draw_price(&mut rng),
    };
    let stock = draw_stock(&mut rng);
    candidate.into_product(price, stock)
}

/// Synthesize every candidate, preserving order
///
/// Records are independent, so this runs on the rayon pool.
#[must_use]
pub fn synthesize_all(candidates: Vec<CandidateRecord>, seed: u64) -> Vec<ProductRecord> {
    candidates
        .into_par_iter()
        .map(|candidate| synthesize_record(candidate, seed))
        .collect()
}
