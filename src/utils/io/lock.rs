//! Sources lock manifest
//!
//! Records what was downloaded: file name, origin URL, byte size and SHA-256
//! of the bytes on disk. Entries are sorted by file name and struct fields are
//! declared in key order so the JSON keys come out sorted.

use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SOURCES_LOCK_FILE;
use crate::error::Result;
use crate::error::util::{safe_read_bytes, write_document};
use crate::models::SCHEMA_VERSION;

/// One downloaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub bytes: u64,
    pub filename: String,
    pub sha256: String,
    pub url: String,
}

/// The whole manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesLock {
    pub schema_version: String,
    pub sources: Vec<SourceEntry>,
}

/// A file that was fetched and where it came from
#[derive(Debug, Clone)]
pub struct Downloaded {
    pub filename: String,
    pub url: String,
    pub path: PathBuf,
}

/// SHA-256 of a byte slice as lower-case hex
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Build the manifest from the files as they are on disk
pub fn build_sources_lock(downloaded: &[Downloaded]) -> Result<SourcesLock> {
    let sources = downloaded
        .iter()
        .map(|item| {
            let bytes = safe_read_bytes(&item.path, "hashing downloaded source")?;
            Ok(SourceEntry {
                bytes: bytes.len() as u64,
                filename: item.filename.clone(),
                sha256: sha256_hex(&bytes),
                url: item.url.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .sorted_by(|a, b| a.filename.cmp(&b.filename))
        .collect_vec();

    Ok(SourcesLock {
        schema_version: SCHEMA_VERSION.to_string(),
        sources,
    })
}

/// Write `sources.lock.json` into the output directory
pub fn write_sources_lock(out_dir: &Path, downloaded: &[Downloaded]) -> Result<PathBuf> {
    let lock = build_sources_lock(downloaded)?;
    let mut rendered = serde_json::to_string_pretty(&lock)?;
    rendered.push('\n');

    let lock_path = out_dir.join(SOURCES_LOCK_FILE);
    write_document(&lock_path, &rendered)?;
    Ok(lock_path)
}
