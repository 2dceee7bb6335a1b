//! Price and free-text list parsing

use smallvec::SmallVec;

/// Max ingredients kept from a free-text list
pub const MAX_INGREDIENTS: usize = 8;

/// Round a euro amount to cents
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse an indicative price with either decimal separator
///
/// Empty, non-numeric, non-finite and negative values yield `None`.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim().replace(',', ".");
    if raw.is_empty() {
        return None;
    }
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value < 0.0 {
        return None;
    }
    Some(round_cents(value))
}

/// Split a comma-separated ingredient text, keeping the first entries
#[must_use]
pub fn split_ingredients(text: &str) -> SmallVec<[String; MAX_INGREDIENTS]> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .take(MAX_INGREDIENTS)
        .map(str::to_string)
        .collect()
}
