//! Configuration for catalog builds and source downloads.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CatalogError, Result};

/// Base URL of the BDPM download endpoint
pub const BDPM_BASE_URL: &str = "https://base-donnees-publique.medicaments.gouv.fr/download/file";

/// Canonical location of the Open Beauty Facts French export
pub const OBF_FR_CSV_URL: &str =
    "https://fr.openbeautyfacts.org/data/fr.openbeautyfacts.org.products.csv";

/// Drug names file
pub const BDPM_NAMES_FILE: &str = "CIS_bdpm.txt";
/// Drug packaging file
pub const BDPM_PACKAGES_FILE: &str = "CIS_CIP_bdpm.txt";
/// Prescription and dispensing conditions file
pub const BDPM_CONDITIONS_FILE: &str = "CIS_CPD_bdpm.txt";
/// Local name of the beauty-product export
pub const OBF_FILE: &str = "fr.openbeautyfacts.org.products.csv";
/// Manifest written next to downloaded sources
pub const SOURCES_LOCK_FILE: &str = "sources.lock.json";

/// All BDPM files, in download order
pub const BDPM_FILES: [&str; 3] = [BDPM_NAMES_FILE, BDPM_PACKAGES_FILE, BDPM_CONDITIONS_FILE];

/// Environment variable overriding the beauty-product row limit
pub const ENV_BEAUTY_ROW_LIMIT: &str = "OTC_CATALOG_BEAUTY_ROW_LIMIT";
/// Environment variable overriding the beauty-product URL
pub const ENV_OBF_URL: &str = "OTC_CATALOG_OBF_URL";
/// Environment variable overriding the BDPM base URL
pub const ENV_BDPM_BASE_URL: &str = "OTC_CATALOG_BDPM_BASE_URL";

/// Where and how source files are fetched
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL the BDPM file names are appended to
    pub bdpm_base_url: String,
    /// URL of the beauty-product export
    pub obf_url: String,
    /// Request timeout for downloads
    pub timeout: Duration,
    /// Request timeout for the beauty-product fallback during a build
    pub fallback_timeout: Duration,
    /// Max beauty-product lines kept locally, header included
    pub obf_max_lines: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            bdpm_base_url: BDPM_BASE_URL.to_string(),
            obf_url: OBF_FR_CSV_URL.to_string(),
            timeout: Duration::from_secs(60),
            fallback_timeout: Duration::from_secs(120),
            obf_max_lines: 200_000,
        }
    }
}

impl SourceConfig {
    /// URL of one BDPM file
    #[must_use]
    pub fn bdpm_url(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.bdpm_base_url.trim_end_matches('/'))
    }
}

/// Configuration for a catalog build
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory holding the source files
    pub raw_dir: PathBuf,
    /// Path of the catalog JSON to write
    pub out_path: PathBuf,
    /// Max products in the output (at least one is always kept)
    pub max_products: usize,
    /// Global seed combined with each SKU for synthesis
    pub seed: u64,
    /// Max beauty-product data rows consumed
    pub beauty_row_limit: usize,
    /// Source locations, used for the beauty-product fallback
    pub sources: SourceConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("data/raw"),
            out_path: PathBuf::from("products.demo.json"),
            max_products: 500,
            seed: 42,
            beauty_row_limit: 20_000,
            sources: SourceConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Create a configuration for the given input directory and output file
    #[must_use]
    pub fn new(raw_dir: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            out_path: out_path.into(),
            ..Self::default()
        }
    }

    /// Set the max number of products
    #[must_use]
    pub const fn max_products(mut self, max_products: usize) -> Self {
        self.max_products = max_products;
        self
    }

    /// Set the global seed
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the beauty-product row limit
    #[must_use]
    pub const fn beauty_row_limit(mut self, limit: usize) -> Self {
        self.beauty_row_limit = limit;
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_BEAUTY_ROW_LIMIT) {
            self.beauty_row_limit = raw.trim().parse::<usize>().map_err(|e| {
                CatalogError::Config(format!(
                    "{ENV_BEAUTY_ROW_LIMIT}={raw:?} is not a row count: {e}"
                ))
            })?;
        }
        if let Some(url) = lookup(ENV_OBF_URL).filter(|u| !u.trim().is_empty()) {
            self.sources.obf_url = url;
        }
        if let Some(url) = lookup(ENV_BDPM_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.sources.bdpm_base_url = url;
        }
        Ok(self)
    }

    /// Path of one file inside the raw directory
    #[must_use]
    pub fn raw_file(&self, file_name: &str) -> PathBuf {
        self.raw_dir.join(file_name)
    }

    /// Effective output size, never below one
    #[must_use]
    pub fn effective_max_products(&self) -> usize {
        self.max_products.max(1)
    }
}

impl fmt::Display for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Catalog Configuration:")?;
        writeln!(f, "  Raw Dir: {}", self.raw_dir.display())?;
        writeln!(f, "  Output: {}", self.out_path.display())?;
        writeln!(f, "  Max Products: {}", self.effective_max_products())?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Beauty Row Limit: {}", self.beauty_row_limit)?;
        Ok(())
    }
}
