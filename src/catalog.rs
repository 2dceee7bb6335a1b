//! Catalog build pipeline
//!
//! Source registries → merge → synthesis → truncation → JSON output. The
//! output file is only written once the whole catalog has been computed.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::{merge_records_with_summary, synthesize_all};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::error::util::require_files;
use crate::models::ProductRecord;
use crate::registry::{BdpmRegistry, BeautyFallback, ObfRegistry, RegistryLoader};
use crate::utils::io::{truncate_catalog, write_catalog};

/// Row counts of one build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Eligible BDPM packages
    pub bdpm_rows: usize,
    /// Eligible beauty products
    pub obf_rows: usize,
    /// Products written to the catalog
    pub merged_rows: usize,
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bdpm_rows={} obf_rows={} merged_rows={}",
            self.bdpm_rows, self.obf_rows, self.merged_rows
        )
    }
}

/// Compute the catalog without writing it
pub fn build_products(
    config: &CatalogConfig,
    fallback: &dyn BeautyFallback,
) -> Result<(Vec<ProductRecord>, BuildStats)> {
    let start = Instant::now();
    let bdpm = BdpmRegistry;
    let obf = ObfRegistry::new(fallback, config.sources.obf_url.as_str(), config.beauty_row_limit);

    let required: Vec<PathBuf> = bdpm
        .required_files()
        .iter()
        .map(|name| config.raw_file(name))
        .collect();
    require_files(required.iter().map(PathBuf::as_path))?;

    let registry = bdpm.load(&config.raw_dir)?;
    let beauty = obf.load(&config.raw_dir)?;
    let bdpm_rows = registry.len();
    let obf_rows = beauty.len();

    let (merged, summary) = merge_records_with_summary(registry, beauty);
    log::info!(
        "Merged {} {} and {} {} records into {} ({} SKU collisions)",
        bdpm_rows,
        bdpm.get_register_name(),
        obf_rows,
        obf.get_register_name(),
        merged.len(),
        summary.collisions
    );

    let products = truncate_catalog(synthesize_all(merged, config.seed), config.max_products);
    let stats = BuildStats {
        bdpm_rows,
        obf_rows,
        merged_rows: products.len(),
    };
    log::info!("Built catalog ({stats}) in {:?}", start.elapsed());
    Ok((products, stats))
}

/// Build the catalog and write it to `config.out_path`
pub fn build_demo_catalog(
    config: &CatalogConfig,
    fallback: &dyn BeautyFallback,
) -> Result<BuildStats> {
    let (products, stats) = build_products(config, fallback)?;
    write_catalog(&config.out_path, &products)?;
    Ok(stats)
}
