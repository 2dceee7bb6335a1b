use crate::utils::{BEAUTY_SKU, OBF_HEADER, obf_row, sample_obf_lines, workspace, write_utf8};
use otc_catalog::config::OBF_FILE;
use otc_catalog::registry::{ObfRegistry, RegistryLoader};
use otc_catalog::{Category, NoFallback, SourcePriority};

#[test]
fn test_only_french_tagged_rows_are_kept() {
    let (_dir, raw, _) = workspace();
    std::fs::create_dir_all(&raw).unwrap();
    write_utf8(&raw.join(OBF_FILE), &sample_obf_lines());

    let candidates = ObfRegistry::new(&NoFallback, "http://unused.test", 20_000)
        .load(&raw)
        .unwrap();
    assert_eq!(candidates.len(), 1);

    let cream = &candidates[0];
    assert_eq!(cream.sku, BEAUTY_SKU);
    assert_eq!(cream.name, "Crème hydratante");
    assert_eq!(cream.brand, "DermaBrand");
    assert_eq!(cream.category, Category::Dermatology);
    assert_eq!(cream.ingredients, ["aqua", "glycerin"]);
    assert_eq!(cream.source, SourcePriority::Beauty);
}

#[test]
fn test_row_limit_counts_dropped_rows() {
    let (_dir, raw, _) = workspace();
    std::fs::create_dir_all(&raw).unwrap();
    let lines = vec![
        OBF_HEADER.to_string(),
        obf_row("1", "Ailleurs", "B", "en:spain", "", "en:soap"),
        obf_row("2", "Ici", "B", "en:france", "", "en:soap"),
    ];
    write_utf8(&raw.join(OBF_FILE), &lines);

    let limited = ObfRegistry::new(&NoFallback, "http://unused.test", 1)
        .load(&raw)
        .unwrap();
    assert!(limited.is_empty());

    let unlimited = ObfRegistry::new(&NoFallback, "http://unused.test", 2)
        .load(&raw)
        .unwrap();
    assert_eq!(unlimited.len(), 1);
    assert_eq!(unlimited[0].sku, "2");
}

#[test]
fn test_supplement_and_hygiene_tags() {
    let (_dir, raw, _) = workspace();
    std::fs::create_dir_all(&raw).unwrap();
    let lines = vec![
        OBF_HEADER.to_string(),
        obf_row("10", "Vitamine C", "", "en:france", "", "en:food-supplements"),
        obf_row("11", "Gel douche", "", "en:france", "", "en:hygiene,en:shower-gels"),
    ];
    write_utf8(&raw.join(OBF_FILE), &lines);

    let candidates = ObfRegistry::new(&NoFallback, "http://unused.test", 10)
        .load(&raw)
        .unwrap();
    assert_eq!(candidates[0].category, Category::Digestion);
    assert_eq!(candidates[1].category, Category::Other);
    assert_eq!(candidates[1].brand, "Unknown");
}
