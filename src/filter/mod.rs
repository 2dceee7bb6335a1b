//! Filtering and classification rules
//!
//! Pure functions over immutable keyword tables: text normalization, OTC
//! eligibility, category assignment and price parsing.

pub mod category;
pub mod otc;
pub mod price;
pub mod text;

pub use category::{classify_beauty_tags, classify_drug_name};
pub use otc::{is_otc_classification, is_otc_eligible};
pub use price::{parse_price, round_cents, split_ingredients};
pub use text::normalize;
