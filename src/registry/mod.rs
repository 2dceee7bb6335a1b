//! Source registries for the catalog
//!
//! Each registry reads its files from the raw directory and turns eligible
//! rows into [`CandidateRecord`]s tagged with their source.
//!
//! Available registries:
//! - BDPM (Base de Données Publique des Médicaments): French drug registry
//! - OBF (Open Beauty Facts): crowd-sourced beauty-product export

pub mod bdpm;
pub mod obf;

use std::path::Path;

use crate::Result;
use crate::models::CandidateRecord;

pub use bdpm::{BdpmRegistry, DrugRegistry};
pub use obf::{BeautyFallback, BeautyProductRow, NoFallback, ObfRegistry};

/// Base trait for registry loaders
pub trait RegistryLoader {
    /// Get the name of the register
    fn get_register_name(&self) -> &'static str;

    /// Files that must exist in the raw directory
    fn required_files(&self) -> &'static [&'static str];

    /// Load candidate records from the raw directory
    fn load(&self, raw_dir: &Path) -> Result<Vec<CandidateRecord>>;
}
