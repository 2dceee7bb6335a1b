//! Common domain type definitions
//!
//! Enumerations shared by the record builders, the merger and the public
//! product record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse product category shown to catalog consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Allergy relief (antihistamines, rhinitis)
    Allergy,
    /// Digestive comfort, also used for supplements and vitamins
    Digestion,
    /// Skin care
    Dermatology,
    /// Pain and headache relief
    Pain,
    /// Eye care
    Eye,
    /// Urinary care
    Urology,
    /// Anything not matched by a keyword group
    Other,
}

impl Category {
    /// Get the serialized name of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allergy => "allergy",
            Self::Digestion => "digestion",
            Self::Dermatology => "dermatology",
            Self::Pain => "pain",
            Self::Eye => "eye",
            Self::Urology => "urology",
            Self::Other => "other",
        }
    }

    /// Get all categories
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Allergy,
            Self::Digestion,
            Self::Dermatology,
            Self::Pain,
            Self::Eye,
            Self::Urology,
            Self::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which source a candidate record came from
///
/// Registry records establish canonical identity on SKU collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourcePriority {
    /// Beauty-product export (lower priority)
    Beauty,
    /// National drug registry (higher priority)
    Registry,
}

impl fmt::Display for SourcePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beauty => f.write_str("obf"),
            Self::Registry => f.write_str("bdpm"),
        }
    }
}
