use crate::utils::{CREAM_SKU, HOSPITAL_SKU, LORATADINE_SKU, workspace, write_bdpm_sources};
use otc_catalog::config::BDPM_CONDITIONS_FILE;
use otc_catalog::models::UNKNOWN_BRAND;
use otc_catalog::registry::{BdpmRegistry, DrugRegistry, RegistryLoader};
use otc_catalog::{CatalogError, Category};

#[test]
fn test_latin1_sources_are_decoded() {
    let (_dir, raw, _) = workspace();
    write_bdpm_sources(&raw);

    let registry = DrugRegistry::load(&raw).unwrap();
    assert_eq!(registry.names["60000003"].name, "Crème apaisante");
    assert_eq!(
        registry.condition("60000002"),
        Some("réservé à l'usage hospitalier")
    );
    // Truncated names row and unknown packaging id are skipped.
    assert!(!registry.names.contains_key("60000009"));
    assert_eq!(registry.packages.len(), 3);
}

#[test]
fn test_hospital_only_excluded_and_unlisted_included() {
    let (_dir, raw, _) = workspace();
    write_bdpm_sources(&raw);

    let candidates = BdpmRegistry.load(&raw).unwrap();
    let skus: Vec<_> = candidates.iter().map(|c| c.sku.as_str()).collect();
    assert_eq!(skus, [LORATADINE_SKU, CREAM_SKU]);
    assert!(!skus.contains(&HOSPITAL_SKU));

    let cream = &candidates[1];
    assert_eq!(cream.category, Category::Dermatology);
    assert_eq!(cream.brand, UNKNOWN_BRAND);
    assert_eq!(cream.price_eur, None);
    assert_eq!(candidates[0].price_eur, Some(4.2));
}

#[test]
fn test_missing_registry_file_is_fatal() {
    let (_dir, raw, _) = workspace();
    write_bdpm_sources(&raw);
    std::fs::remove_file(raw.join(BDPM_CONDITIONS_FILE)).unwrap();

    match BdpmRegistry.load(&raw) {
        Err(CatalogError::MissingSource { path }) => {
            assert!(path.ends_with(BDPM_CONDITIONS_FILE));
        }
        other => panic!("expected missing source, got {other:?}"),
    }
}
