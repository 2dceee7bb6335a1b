use std::collections::{HashMap, HashSet};

use crate::utils::{
    BEAUTY_SKU, CREAM_SKU, FailingFallback, LORATADINE_SKU, OBF_HEADER, obf_row, read_catalog,
    sample_config, workspace, write_bdpm_sources, write_sample_sources, write_utf8,
};
use otc_catalog::config::{BDPM_NAMES_FILE, OBF_FILE};
use otc_catalog::{CatalogError, Category, build_demo_catalog, build_products};

#[test]
fn test_build_with_sample_sources() {
    let (_dir, raw, out) = workspace();
    write_sample_sources(&raw);

    let stats = build_demo_catalog(&sample_config(&raw, &out), &FailingFallback).unwrap();
    assert_eq!(stats.bdpm_rows, 2);
    assert_eq!(stats.obf_rows, 1);
    assert_eq!(stats.merged_rows, 3);

    let products = read_catalog(&out);
    let skus: Vec<_> = products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, [BEAUTY_SKU, LORATADINE_SKU, CREAM_SKU]);

    let unique: HashSet<_> = skus.iter().collect();
    assert_eq!(unique.len(), skus.len());
    assert!(skus.windows(2).all(|w| w[0] < w[1]));

    for product in &products {
        assert_eq!(product.schema_version, "0.0.0");
        assert!(!product.sku.is_empty());
        assert!(!product.name.is_empty());
        assert!(Category::all().contains(&product.category));
        assert!(product.contraindication_tags.is_empty());
        assert!((1..=24).contains(&product.stock_qty));
        assert_eq!(product.in_stock, product.stock_qty > 0);
    }

    let loratadine = &products[1];
    assert_eq!(loratadine.price_eur, 4.2);
    assert_eq!(loratadine.brand, "LABX");

    for synthesized in [&products[0], &products[2]] {
        assert!((3.0..20.0).contains(&synthesized.price_eur));
    }
}

#[test]
fn test_build_is_deterministic_for_same_seed() {
    let (dir, raw, out) = workspace();
    write_sample_sources(&raw);
    let other = dir.path().join("b.json");

    build_demo_catalog(&sample_config(&raw, &out), &FailingFallback).unwrap();
    build_demo_catalog(&sample_config(&raw, &other), &FailingFallback).unwrap();

    let a = std::fs::read(&out).unwrap();
    let b = std::fs::read(&other).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_seed_changes_generated_values() {
    let (_dir, raw, out) = workspace();
    write_sample_sources(&raw);

    let (a, _) = build_products(&sample_config(&raw, &out).seed(42), &FailingFallback).unwrap();
    let (b, _) = build_products(&sample_config(&raw, &out).seed(43), &FailingFallback).unwrap();

    let by_sku_a: HashMap<_, _> = a.iter().map(|p| (p.sku.clone(), p)).collect();
    let by_sku_b: HashMap<_, _> = b.iter().map(|p| (p.sku.clone(), p)).collect();
    assert_eq!(
        by_sku_a.keys().collect::<HashSet<_>>(),
        by_sku_b.keys().collect::<HashSet<_>>()
    );
    assert!(by_sku_a.iter().any(|(sku, pa)| {
        let pb = by_sku_b[sku];
        pa.stock_qty != pb.stock_qty || pa.price_eur != pb.price_eur
    }));
}

#[test]
fn test_max_products_truncates_sorted_output() {
    let (_dir, raw, out) = workspace();
    write_sample_sources(&raw);

    let config = sample_config(&raw, &out);
    let (all, _) = build_products(&config.clone().max_products(50), &FailingFallback).unwrap();
    assert_eq!(all.len(), 3);

    let (one, stats) = build_products(&config.clone().max_products(1), &FailingFallback).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].sku, BEAUTY_SKU);
    assert_eq!(stats.merged_rows, 1);

    let (floor, _) = build_products(&config.max_products(0), &FailingFallback).unwrap();
    assert_eq!(floor.len(), 1);
}

#[test]
fn test_collision_keeps_registry_fields_and_enriches_ingredients() {
    let (_dir, raw, out) = workspace();
    write_bdpm_sources(&raw);
    write_utf8(
        &raw.join(OBF_FILE),
        &[
            OBF_HEADER.to_string(),
            obf_row(
                LORATADINE_SKU,
                "Autre nom",
                "AutreMarque",
                "en:france",
                "loratadine, lactose",
                "en:skin-care",
            ),
        ],
    );

    let (products, stats) = build_products(&sample_config(&raw, &out), &FailingFallback).unwrap();
    assert_eq!(stats.obf_rows, 1);
    assert_eq!(products.len(), 2);

    let merged = products.iter().find(|p| p.sku == LORATADINE_SKU).unwrap();
    assert_eq!(merged.name, "Loratadine 10 mg, comprimé");
    assert_eq!(merged.brand, "LABX");
    assert_eq!(merged.category, Category::Other);
    assert_eq!(merged.price_eur, 4.2);
    assert_eq!(merged.ingredients, ["loratadine", "lactose"]);
}

#[test]
fn test_output_is_pretty_unescaped_utf8() {
    let (_dir, raw, out) = workspace();
    write_sample_sources(&raw);
    build_demo_catalog(&sample_config(&raw, &out), &FailingFallback).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("[\n  {\n    \"schema_version\": \"0.0.0\",\n    \"sku\": "));
    assert!(text.ends_with("}\n]\n"));
    assert!(text.contains("Crème hydratante"));
    assert!(!text.contains("\\u00"));
}

#[test]
fn test_missing_registry_file_writes_nothing() {
    let (_dir, raw, out) = workspace();
    write_sample_sources(&raw);
    std::fs::remove_file(raw.join(BDPM_NAMES_FILE)).unwrap();

    let err = build_demo_catalog(&sample_config(&raw, &out), &FailingFallback).unwrap_err();
    assert!(matches!(err, CatalogError::MissingSource { .. }));
    assert!(err.to_string().contains(BDPM_NAMES_FILE));
    assert!(!out.exists());
}
