//! Download of all catalog sources into a raw directory

use std::path::{Path, PathBuf};

use super::fetch::HttpFetcher;
use crate::config::{BDPM_FILES, OBF_FILE, SourceConfig};
use crate::error::Result;
use crate::utils::io::lock::{Downloaded, write_sources_lock};
use crate::utils::logging::{create_spinner, finish_and_clear, log_operation_start};

/// Fetch the three BDPM files and the beauty-product export, then write the lock
///
/// The beauty-product export is cut to `max(2, obf_max_lines)` lines, header
/// included. Returns every written path, lock last.
pub async fn download_sources(config: &SourceConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    log_operation_start("Downloading sources into", out_dir);
    let fetcher = HttpFetcher::new(config)?;
    let mut downloaded = Vec::with_capacity(BDPM_FILES.len() + 1);

    for name in BDPM_FILES {
        let url = config.bdpm_url(name);
        let spinner = create_spinner(Some(&format!("Downloading {name}")));
        let result = fetcher.fetch_to_file(&url, &out_dir.join(name)).await;
        finish_and_clear(&spinner);
        downloaded.push(Downloaded {
            filename: name.to_string(),
            url,
            path: result?,
        });
    }

    let spinner = create_spinner(Some(&format!("Downloading {OBF_FILE}")));
    let result = fetcher
        .fetch_lines_to_file(&config.obf_url, &out_dir.join(OBF_FILE), config.obf_max_lines.max(2))
        .await;
    finish_and_clear(&spinner);
    downloaded.push(Downloaded {
        filename: OBF_FILE.to_string(),
        url: config.obf_url.clone(),
        path: result?,
    });

    let lock_path = write_sources_lock(out_dir, &downloaded)?;
    let mut paths: Vec<PathBuf> = downloaded.into_iter().map(|d| d.path).collect();
    paths.push(lock_path);
    Ok(paths)
}
