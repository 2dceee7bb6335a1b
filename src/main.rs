use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use otc_catalog::{CatalogConfig, HttpFetcher, build_demo_catalog, download_sources};

#[derive(Debug, Parser)]
#[command(name = "otc-catalog", version, about = "Build a deterministic OTC demo catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Download BDPM + OBF source files.
    DownloadSources {
        /// Output directory for raw files.
        #[arg(long)]
        out: PathBuf,
        /// Max OBF CSV lines to keep locally (header included).
        #[arg(long, default_value_t = 200_000)]
        obf_max_lines: usize,
    },
    /// Build deterministic demo catalog JSON.
    BuildDemo {
        /// Directory containing source files.
        #[arg(long)]
        raw_dir: PathBuf,
        /// Output products.demo.json path.
        #[arg(long)]
        out: PathBuf,
        /// Max products to include.
        #[arg(long, default_value_t = 500)]
        max_products: usize,
        /// Deterministic seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::DownloadSources { out, obf_max_lines } => {
            let mut config = CatalogConfig::default().with_env_overrides()?;
            config.sources.obf_max_lines = obf_max_lines;

            let paths = download_sources(&config.sources, &out)
                .await
                .with_context(|| format!("downloading sources into {}", out.display()))?;
            println!("DOWNLOADED {} files to {}", paths.len(), out.display());
            for path in &paths {
                println!("- {}", path.display());
            }
        }
        Command::BuildDemo {
            raw_dir,
            out,
            max_products,
            seed,
        } => {
            let config = CatalogConfig::new(raw_dir, &out)
                .max_products(max_products)
                .seed(seed)
                .with_env_overrides()?;
            info!("{config}");

            let fetcher = HttpFetcher::new(&config.sources)?;
            // The beauty-product fallback blocks on the runtime, so the build
            // runs off the async worker threads.
            let stats = tokio::task::spawn_blocking(move || build_demo_catalog(&config, &fetcher))
                .await
                .context("catalog build task panicked")?
                .context("building demo catalog")?;
            println!("BUILD_OK {stats} out={}", out.display());
        }
    }
    Ok(())
}
