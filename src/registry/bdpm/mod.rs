//! BDPM drug registry
//!
//! Reads the three positional BDPM exports: drug names (`CIS_bdpm.txt`),
//! packaging (`CIS_CIP_bdpm.txt`) and dispensing conditions
//! (`CIS_CPD_bdpm.txt`). Short rows and rows referencing an unknown
//! authorization are skipped.

pub mod conversion;
pub mod schema;

use std::path::Path;
use std::time::Instant;

use csv::StringRecord;
use rustc_hash::FxHashMap;

use crate::config::{BDPM_CONDITIONS_FILE, BDPM_FILES, BDPM_NAMES_FILE, BDPM_PACKAGES_FILE};
use crate::error::Result;
use crate::error::util::require_files;
use crate::filter::parse_price;
use crate::models::CandidateRecord;
use crate::registry::RegistryLoader;
use crate::utils::io::tsv::{field, read_latin1_tsv};
use crate::utils::logging::log_source_loaded;
use schema::{
    CONDITIONS_CIS, CONDITIONS_MIN_COLUMNS, CONDITIONS_TEXT, NAMES_CIS, NAMES_HOLDER,
    NAMES_MIN_COLUMNS, NAMES_NAME, PACKAGES_CIP13, PACKAGES_CIS, PACKAGES_MIN_COLUMNS,
    PACKAGES_PRICE,
};

/// One drug authorization from the names file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugName {
    pub cis: String,
    pub name: String,
    /// Holder field, empty when the source has none
    pub brand: String,
}

/// One package of a known authorization
#[derive(Debug, Clone, PartialEq)]
pub struct DrugPackage {
    pub cis: String,
    pub cip13: String,
    pub price: Option<f64>,
}

/// The joined registry: names, packages and dispensing conditions
#[derive(Debug, Clone, Default)]
pub struct DrugRegistry {
    pub names: FxHashMap<String, DrugName>,
    /// Packages in file order
    pub packages: Vec<DrugPackage>,
    pub conditions: FxHashMap<String, String>,
}

/// Parse names rows into a lookup by authorization id
#[must_use]
pub fn parse_names(records: &[StringRecord]) -> FxHashMap<String, DrugName> {
    let mut names = FxHashMap::default();
    for record in records {
        if record.len() < NAMES_MIN_COLUMNS {
            continue;
        }
        let cis = field(record, NAMES_CIS);
        let name = field(record, NAMES_NAME);
        if cis.is_empty() || name.is_empty() {
            continue;
        }
        names.insert(
            cis.to_string(),
            DrugName {
                cis: cis.to_string(),
                name: name.to_string(),
                brand: field(record, NAMES_HOLDER).to_string(),
            },
        );
    }
    names
}

/// Parse packaging rows, keeping only packages of known authorizations
#[must_use]
pub fn parse_packages(
    records: &[StringRecord],
    names: &FxHashMap<String, DrugName>,
) -> Vec<DrugPackage> {
    records
        .iter()
        .filter(|record| record.len() >= PACKAGES_MIN_COLUMNS)
        .filter_map(|record| {
            let cis = field(record, PACKAGES_CIS);
            let cip13 = field(record, PACKAGES_CIP13);
            if cis.is_empty() || cip13.is_empty() || !names.contains_key(cis) {
                return None;
            }
            Some(DrugPackage {
                cis: cis.to_string(),
                cip13: cip13.to_string(),
                price: parse_price(field(record, PACKAGES_PRICE)),
            })
        })
        .collect()
}

/// Parse dispensing-condition rows into a lookup by authorization id
///
/// A later row for the same id replaces an earlier one.
#[must_use]
pub fn parse_conditions(records: &[StringRecord]) -> FxHashMap<String, String> {
    let mut conditions = FxHashMap::default();
    for record in records {
        if record.len() < CONDITIONS_MIN_COLUMNS {
            continue;
        }
        let cis = field(record, CONDITIONS_CIS);
        let text = field(record, CONDITIONS_TEXT);
        if !cis.is_empty() && !text.is_empty() {
            conditions.insert(cis.to_string(), text.to_string());
        }
    }
    conditions
}

impl DrugRegistry {
    /// Load the three BDPM files from a directory
    ///
    /// Fails with `MissingSource` before reading anything if a file is absent.
    pub fn load(raw_dir: &Path) -> Result<Self> {
        let paths = BDPM_FILES.map(|name| raw_dir.join(name));
        require_files(paths.iter().map(|p| p.as_path()))?;

        let start = Instant::now();
        let condition_path = raw_dir.join(BDPM_CONDITIONS_FILE);
        let condition_rows = read_latin1_tsv(&condition_path, "dispensing conditions")?;
        let conditions = parse_conditions(&condition_rows);
        log_source_loaded(
            "condition",
            &condition_path,
            conditions.len(),
            condition_rows.len().saturating_sub(conditions.len()),
            start.elapsed(),
        );

        let start = Instant::now();
        let names_path = raw_dir.join(BDPM_NAMES_FILE);
        let name_rows = read_latin1_tsv(&names_path, "drug names")?;
        let names = parse_names(&name_rows);
        log_source_loaded(
            "drug name",
            &names_path,
            names.len(),
            name_rows.len().saturating_sub(names.len()),
            start.elapsed(),
        );

        let start = Instant::now();
        let packages_path = raw_dir.join(BDPM_PACKAGES_FILE);
        let package_rows = read_latin1_tsv(&packages_path, "drug packaging")?;
        let packages = parse_packages(&package_rows, &names);
        log_source_loaded(
            "package",
            &packages_path,
            packages.len(),
            package_rows.len() - packages.len(),
            start.elapsed(),
        );

        Ok(Self {
            names,
            packages,
            conditions,
        })
    }
}

/// Loader for the BDPM registry
#[derive(Debug, Clone, Copy, Default)]
pub struct BdpmRegistry;

impl RegistryLoader for BdpmRegistry {
    fn get_register_name(&self) -> &'static str {
        "bdpm"
    }

    fn required_files(&self) -> &'static [&'static str] {
        &BDPM_FILES
    }

    fn load(&self, raw_dir: &Path) -> Result<Vec<CandidateRecord>> {
        let registry = DrugRegistry::load(raw_dir)?;
        Ok(registry.candidates())
    }
}
