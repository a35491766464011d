//! # Countries Subcommand
//!
//! List the datasets a data directory can actually serve — the same scan
//! an admin surface runs when offering countries to enable — and mark
//! which of them the current settings enable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use postfill_core::Settings;
use postfill_dataset::discover;

/// Arguments for the `postfill countries` subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Data directory holding `{cc}.json` dataset files.
    #[arg(long, default_value = "assets/data")]
    pub data_dir: PathBuf,

    /// Comma-separated enabled-country list
    /// (defaults to POSTFILL_COUNTRIES, then MY).
    #[arg(long)]
    pub enabled: Option<String>,
}

pub fn run_countries(args: &CountriesArgs) -> Result<u8> {
    let settings = match &args.enabled {
        Some(raw) => Settings::new(Settings::parse_countries(raw), true),
        None => Settings::from_env(),
    };

    let found = discover(&args.data_dir)
        .with_context(|| format!("cannot scan {}", args.data_dir.display()))?;

    if found.is_empty() {
        println!("no servable datasets in {}", args.data_dir.display());
        return Ok(1);
    }

    for dataset in found {
        let marker = if settings.is_enabled(&dataset.country) {
            "  [enabled]"
        } else {
            ""
        };
        println!(
            "{}  {:>7} entries  {}{}",
            dataset.country,
            dataset.entry_count,
            dataset.path.display(),
            marker
        );
    }

    Ok(0)
}
