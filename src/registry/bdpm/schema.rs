//! BDPM file column layout
//!
//! The BDPM exports are positional; these are the columns the catalog reads.

/// Minimum column count of a names row
pub const NAMES_MIN_COLUMNS: usize = 12;
/// Drug authorization id (CIS)
pub const NAMES_CIS: usize = 0;
/// Drug name
pub const NAMES_NAME: usize = 1;
/// Marketing authorization holder, used as brand
pub const NAMES_HOLDER: usize = 11;

/// Minimum column count of a packaging row
pub const PACKAGES_MIN_COLUMNS: usize = 7;
/// Drug authorization id (CIS)
pub const PACKAGES_CIS: usize = 0;
/// 13-digit package id (CIP13)
pub const PACKAGES_CIP13: usize = 6;
/// Indicative price, may be missing on short rows
pub const PACKAGES_PRICE: usize = 9;

/// Minimum column count of a dispensing-conditions row
pub const CONDITIONS_MIN_COLUMNS: usize = 2;
/// Drug authorization id (CIS)
pub const CONDITIONS_CIS: usize = 0;
/// Free-text dispensing condition
pub const CONDITIONS_TEXT: usize = 1;
