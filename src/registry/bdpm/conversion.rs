//! BDPM rows to catalog candidates

use super::{DrugPackage, DrugRegistry};
use crate::filter::{classify_drug_name, is_otc_eligible};
use crate::models::{CandidateRecord, SourcePriority};

/// Placeholder stock for registry records, redrawn by synthesis
pub const REGISTRY_PLACEHOLDER_STOCK: u32 = 10;

impl DrugRegistry {
    /// Dispensing condition of an authorization, if any
    #[must_use]
    pub fn condition(&self, cis: &str) -> Option<&str> {
        self.conditions.get(cis).map(String::as_str)
    }

    /// Convert one package into a candidate
    ///
    /// Returns `None` when the authorization is unknown or its dispensing
    /// condition blocks OTC sale.
    #[must_use]
    pub fn package_to_candidate(&self, package: &DrugPackage) -> Option<CandidateRecord> {
        let drug = self.names.get(&package.cis)?;
        if package.cip13.is_empty() || !is_otc_eligible(self.condition(&package.cis)) {
            return None;
        }

        Some(
            CandidateRecord::new(
                package.cip13.as_str(),
                drug.name.as_str(),
                &drug.brand,
                classify_drug_name(&drug.name),
                SourcePriority::Registry,
            )
            .with_price(package.price)
            .with_stock(REGISTRY_PLACEHOLDER_STOCK),
        )
    }

    /// Candidates for every eligible package, in packaging file order
    #[must_use]
    pub fn candidates(&self) -> Vec<CandidateRecord> {
        let candidates: Vec<_> = self
            .packages
            .iter()
            .filter_map(|package| self.package_to_candidate(package))
            .collect();
        log::debug!(
            "{} of {} BDPM packages are OTC eligible",
            candidates.len(),
            self.packages.len()
        );
        candidates
    }
}
