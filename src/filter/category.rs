//! Keyword-based category classification

use super::text::normalize;
use crate::models::Category;

/// Keyword groups matched against normalized drug names, in priority order
pub const DRUG_NAME_GROUPS: &[(Category, &[&str])] = &[
    (Category::Allergy, &["allerg", "rhinit", "antihistamin"]),
    (
        Category::Digestion,
        &["diges", "constipat", "diarr", "ballonn", "reflux"],
    ),
    (Category::Dermatology, &["peau", "derm", "ecz", "creme", "baume"]),
    (
        Category::Pain,
        &["douleur", "migraine", "cephale", "headache", "pain"],
    ),
    (Category::Eye, &["oeil", "eye", "ocul", "conjonctiv"]),
    (Category::Urology, &["urin", "urolog"]),
];

/// Classify a drug by its name; the first matching group wins
#[must_use]
pub fn classify_drug_name(name: &str) -> Category {
    let normalized = normalize(name);
    DRUG_NAME_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map_or(Category::Other, |(category, _)| *category)
}

/// Classify a beauty product by its category tags
///
/// Returns `None` for empty tags, which cannot be classified.
#[must_use]
pub fn classify_beauty_tags(tags: &str) -> Option<Category> {
    let tags = tags.trim().to_lowercase();
    if tags.is_empty() {
        return None;
    }
    let category = if tags.contains("supplement") || tags.contains("vitamin") {
        Category::Digestion
    } else if tags.contains("hygiene") {
        Category::Other
    } else {
        Category::Dermatology
    };
    Some(category)
}
