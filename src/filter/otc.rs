//! Over-the-counter eligibility from BDPM dispensing conditions

use super::text::normalize;

/// Normalized terms that mark a drug as prescription-only or hospital-only
pub const BLOCKED_TERMS: &[&str] = &[
    "usage hospitalier",
    "reserve a lusage hospitalier",
    "prescription",
    "liste i",
    "liste ii",
    "stupefiant",
];

/// Decide whether a dispensing-condition text allows OTC sale
///
/// Empty text carries no restriction and is eligible.
#[must_use]
pub fn is_otc_classification(text: &str) -> bool {
    let normalized = normalize(text);
    !BLOCKED_TERMS.iter().any(|term| normalized.contains(term))
}

/// Eligibility for an optional condition entry
///
/// Authorizations without an entry are eligible by default.
#[must_use]
pub fn is_otc_eligible(condition: Option<&str>) -> bool {
    condition.is_none_or(is_otc_classification)
}
