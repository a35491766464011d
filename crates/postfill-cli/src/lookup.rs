//! # Lookup Subcommand
//!
//! Resolve a postcode the way the embedded engine would: load the
//! country's table (HTTP deployment or local data directory), exact-match
//! the postcode, print locality and state.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use postfill_core::CountryCode;
use postfill_dataset::{
    DataSourceConfig, DatasetCache, DatasetFetcher, DirFetcher, HttpFetcher,
};

/// Arguments for the `postfill lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Postcode to resolve.
    pub postcode: String,

    /// Two-letter country code.
    #[arg(long, default_value = "MY")]
    pub country: String,

    /// Deployment base URL serving `assets/data/{cc}.json`
    /// (defaults to POSTFILL_BASE_URL).
    #[arg(long)]
    pub base_url: Option<url::Url>,

    /// Local data directory holding `{cc}.json`; overrides the HTTP source.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

pub fn run_lookup(args: &LookupArgs) -> Result<u8> {
    let country: CountryCode = args.country.parse()?;

    let fetcher: Arc<dyn DatasetFetcher> = match &args.data_dir {
        Some(dir) => Arc::new(DirFetcher::new(dir)),
        None => {
            let config = match &args.base_url {
                Some(base) => DataSourceConfig::new(base.clone()),
                None => DataSourceConfig::from_env()
                    .context("pass --data-dir or --base-url, or set POSTFILL_BASE_URL")?,
            };
            Arc::new(HttpFetcher::new(config)?)
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let cache = DatasetCache::new(fetcher);
    let Some(table) = runtime.block_on(cache.table(&country)) else {
        println!("no dataset available for {country}");
        return Ok(1);
    };

    match table.resolve(args.postcode.trim()) {
        Some(hit) => {
            println!("{} {} -> {}, {}", country, args.postcode, hit.locality, hit.state);
            Ok(0)
        }
        None => {
            println!("{} {} -> no match", country, args.postcode);
            Ok(1)
        }
    }
}
