//! HTTP retrieval of source files
//!
//! Every request carries a bounded timeout and any non-success status is an
//! error. Nothing is retried.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::config::SourceConfig;
use crate::error::{CatalogError, Result};
use crate::registry::obf::BeautyFallback;

/// HTTP client for the source endpoints
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
    fallback_timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher using the timeouts of a source configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::fetch("<client>", e))?;
        Ok(Self {
            client,
            timeout: config.timeout,
            fallback_timeout: config.fallback_timeout,
        })
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<reqwest::Response> {
        log::debug!("GET {url}");
        self.client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| CatalogError::fetch(url, e))
    }

    /// Download a whole file to `dest`, creating parent directories
    pub async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<PathBuf> {
        let response = self.get(url, self.timeout).await?;
        let bytes = response.bytes().await.map_err(|e| CatalogError::fetch(url, e))?;

        create_parent(dest).await?;
        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| CatalogError::io_at("writing", dest, e))?;
        log::info!("Downloaded {} bytes from {url}", bytes.len());
        Ok(dest.to_path_buf())
    }

    /// Stream at most `max_lines` text lines from `url`
    ///
    /// The body is read incrementally and the connection dropped once enough
    /// lines are collected. Line terminators are removed.
    pub async fn fetch_lines_async(
        &self,
        url: &str,
        max_lines: usize,
        timeout: Duration,
    ) -> Result<Vec<String>> {
        let response = self.get(url, timeout).await?;
        let mut stream = response.bytes_stream();
        let mut splitter = LineSplitter::new(max_lines);

        while !splitter.is_full() {
            let Some(chunk) = stream.next().await else {
                break;
            };
            splitter.push(&chunk.map_err(|e| CatalogError::fetch(url, e))?);
        }
        Ok(splitter.finish())
    }

    /// Download at most `max_lines` lines of `url` into `dest`
    pub async fn fetch_lines_to_file(
        &self,
        url: &str,
        dest: &Path,
        max_lines: usize,
    ) -> Result<PathBuf> {
        let lines = self.fetch_lines_async(url, max_lines, self.timeout).await?;

        create_parent(dest).await?;
        let file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| CatalogError::io_at("creating", dest, e))?;
        let mut writer = tokio::io::BufWriter::new(file);
        let write_err = |e| CatalogError::io_at("writing", dest, e);
        for line in &lines {
            writer.write_all(line.as_bytes()).await.map_err(write_err)?;
            writer.write_all(b"\n").await.map_err(write_err)?;
        }
        writer
            .flush()
            .await
            .map_err(|e| CatalogError::io_at("flushing", dest, e))?;
        log::info!("Downloaded {} lines from {url}", lines.len());
        Ok(dest.to_path_buf())
    }
}

impl BeautyFallback for HttpFetcher {
    /// Blocks on the async fetch
    ///
    /// Inside a multi-threaded runtime the worker is handed over with
    /// `block_in_place`. A current-thread runtime cannot block, so the fetch
    /// then runs on its own thread with a private runtime.
    fn fetch_lines(&self, url: &str, max_lines: usize) -> Result<Vec<String>> {
        let fetch = move || self.fetch_lines_async(url, max_lines, self.fallback_timeout);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(fetch()))
            }
            Ok(_) => std::thread::scope(|scope| {
                scope
                    .spawn(|| block_on_private_runtime(fetch()))
                    .join()
                    .unwrap_or_else(|_| Err(CatalogError::fetch(url, "fetch thread panicked")))
            }),
            Err(_) => block_on_private_runtime(fetch()),
        }
    }
}

fn block_on_private_runtime<T>(fetch: impl Future<Output = Result<T>>) -> Result<T> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CatalogError::io("starting fetch runtime", e))?
        .block_on(fetch)
}

/// Splits a byte stream into at most `max_lines` text lines
///
/// Bytes are buffered until a `\n` arrives, so chunk boundaries may fall
/// anywhere, including inside `\r\n` or a multi-byte character.
#[derive(Debug)]
pub struct LineSplitter {
    max_lines: usize,
    pending: Vec<u8>,
    lines: Vec<String>,
}

impl LineSplitter {
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines,
            pending: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Whether `max_lines` lines have been collected
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.max_lines
    }

    /// Feed one chunk; bytes past the line limit are ignored
    pub fn push(&mut self, chunk: &[u8]) {
        if self.is_full() {
            return;
        }
        self.pending.extend_from_slice(chunk);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.lines.push(decode_line(&line));
            if self.is_full() {
                self.pending.clear();
                return;
            }
        }
    }

    /// Collected lines, including a trailing line without terminator
    #[must_use]
    pub fn finish(mut self) -> Vec<String> {
        if !self.pending.is_empty() && !self.is_full() {
            self.lines.push(decode_line(&self.pending));
        }
        self.lines
    }
}

/// Split a sequence of byte chunks into at most `max_lines` lines
#[must_use]
pub fn split_lines<I, B>(chunks: I, max_lines: usize) -> Vec<String>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut splitter = LineSplitter::new(max_lines);
    for chunk in chunks {
        if splitter.is_full() {
            break;
        }
        splitter.push(chunk.as_ref());
    }
    splitter.finish()
}

async fn create_parent(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| CatalogError::io_at("creating", parent, e))?;
    }
    Ok(())
}

fn decode_line(raw: &[u8]) -> String {
    let trimmed = raw.strip_suffix(b"\n").unwrap_or(raw);
    let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
    String::from_utf8_lossy(trimmed).into_owned()
}
