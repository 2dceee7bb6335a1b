use std::path::{Path, PathBuf};
use std::sync::Mutex;

use encoding_rs::mem;
use otc_catalog::config::{BDPM_CONDITIONS_FILE, BDPM_NAMES_FILE, BDPM_PACKAGES_FILE, OBF_FILE};
use otc_catalog::{BeautyFallback, CatalogConfig, CatalogError, ProductRecord, Result};

/// Package of an OTC drug with a condition entry and a price
pub const LORATADINE_SKU: &str = "3400000000011";
/// Package of a hospital-only drug
pub const HOSPITAL_SKU: &str = "3400000000028";
/// Package of a drug without any condition entry and without price
pub const CREAM_SKU: &str = "3400000000035";
/// The only French, tagged beauty product
pub const BEAUTY_SKU: &str = "1234567890123";
/// Beauty product not sold in France
pub const GERMAN_SKU: &str = "4000000000001";
/// Beauty product without category tags
pub const UNTAGGED_SKU: &str = "3600000000002";

pub const OBF_HEADER: &str =
    "code\tproduct_name\tbrands\tcountries_tags\tingredients_text\tcategories_tags";

fn tsv_line(cols: &[&str]) -> String {
    cols.join("\t")
}

/// A names row with the holder in column 11
#[must_use]
pub fn names_row(cis: &str, name: &str, holder: &str) -> String {
    tsv_line(&[
        cis,
        name,
        "comprimé",
        "orale",
        "Autorisation active",
        "Procédure nationale",
        "Commercialisée",
        "01/01/2020",
        "",
        "",
        "",
        holder,
        "Non",
    ])
}

/// A packaging row with the CIP13 in column 6 and the price in column 9
#[must_use]
pub fn package_row(cis: &str, cip7: &str, cip13: &str, price: &str) -> String {
    tsv_line(&[
        cis,
        cip7,
        "boîte",
        "Présentation active",
        "Déclaration",
        "01/01/2020",
        cip13,
        "oui",
        "",
        price,
        "",
        "",
    ])
}

/// A beauty-product row in header order
#[must_use]
pub fn obf_row(
    code: &str,
    name: &str,
    brand: &str,
    countries: &str,
    ingredients: &str,
    categories: &str,
) -> String {
    tsv_line(&[code, name, brand, countries, ingredients, categories])
}

/// Write lines as 8-bit Latin text
pub fn write_latin1(path: &Path, lines: &[String]) {
    let mut text = lines.join("\n");
    text.push('\n');
    assert!(mem::is_str_latin1(&text), "fixture text must be Latin-1");
    std::fs::write(path, &*mem::encode_latin1_lossy(&text)).unwrap();
}

/// Write lines as UTF-8 text
pub fn write_utf8(path: &Path, lines: &[String]) {
    let mut text = lines.join("\n");
    text.push('\n');
    std::fs::write(path, text).unwrap();
}

/// BDPM fixture: one OTC drug, one hospital-only drug, one drug without conditions
pub fn write_bdpm_sources(raw: &Path) {
    std::fs::create_dir_all(raw).unwrap();
    write_latin1(
        &raw.join(BDPM_NAMES_FILE),
        &[
            names_row("60000001", "Loratadine 10 mg, comprimé", "LABX"),
            names_row("60000002", "Produit hospitalier test", "LABY"),
            names_row("60000003", "Crème apaisante", ""),
            "60000009\tLigne tronquée".to_string(),
        ],
    );
    write_latin1(
        &raw.join(BDPM_PACKAGES_FILE),
        &[
            package_row("60000001", "111", LORATADINE_SKU, "4,20"),
            package_row("60000002", "222", HOSPITAL_SKU, "5,10"),
            package_row("60000003", "333", CREAM_SKU, ""),
            package_row("69999999", "999", "3400000000097", "1,00"),
        ],
    );
    write_latin1(
        &raw.join(BDPM_CONDITIONS_FILE),
        &[
            "60000001\tdélivrance en pharmacie".to_string(),
            "60000002\tréservé à l'usage hospitalier".to_string(),
        ],
    );
}

/// Beauty fixture: one kept row, one non-French row, one untagged row
#[must_use]
pub fn sample_obf_lines() -> Vec<String> {
    vec![
        OBF_HEADER.to_string(),
        obf_row(
            BEAUTY_SKU,
            "Crème hydratante",
            "DermaBrand",
            "en:france",
            "aqua, glycerin",
            "en:beauty-products,en:skin-care",
        ),
        obf_row(GERMAN_SKU, "Hautcreme", "Marke", "en:germany", "aqua", "en:skin-care"),
        obf_row(UNTAGGED_SKU, "Savon sans tag", "Savonnerie", "en:france", "", ""),
    ]
}

/// Write every source file into `raw`
pub fn write_sample_sources(raw: &Path) {
    write_bdpm_sources(raw);
    write_utf8(&raw.join(OBF_FILE), &sample_obf_lines());
}

/// Build configuration for a fixture directory
#[must_use]
pub fn sample_config(raw: &Path, out: &Path) -> CatalogConfig {
    CatalogConfig::new(raw, out).max_products(50).seed(42)
}

/// Read a written catalog back
#[must_use]
pub fn read_catalog(path: &Path) -> Vec<ProductRecord> {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Fallback serving fixed lines and recording its calls
#[derive(Debug, Default)]
pub struct StubFallback {
    pub lines: Vec<String>,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl StubFallback {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

impl BeautyFallback for StubFallback {
    fn fetch_lines(&self, url: &str, max_lines: usize) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push((url.to_string(), max_lines));
        Ok(self.lines.iter().take(max_lines).cloned().collect())
    }
}

/// Fallback simulating an unreachable host
#[derive(Debug, Default)]
pub struct FailingFallback;

impl BeautyFallback for FailingFallback {
    fn fetch_lines(&self, url: &str, _max_lines: usize) -> Result<Vec<String>> {
        Err(CatalogError::fetch(url, "503 Service Unavailable"))
    }
}

/// Temporary raw directory and output path
#[must_use]
pub fn workspace() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw");
    let out = dir.path().join("out").join("products.demo.json");
    (dir, raw, out)
}
