//! # Validate Subcommand
//!
//! Parse and invariant-check dataset files before they ship. The engine
//! silently treats a broken dataset as "no data"; this command is where a
//! broken dataset actually gets reported.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use postfill_core::LookupTable;

/// Arguments for the `postfill validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Dataset file(s) to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut failures = 0u32;

    for path in &args.files {
        match check_file(path) {
            Ok(table) => println!(
                "ok    {} — {} ({} entries, {} states)",
                path.display(),
                table.country,
                table.len(),
                table.states.len()
            ),
            Err(error) => {
                failures += 1;
                println!("FAIL  {} — {error:#}", path.display());
            }
        }
    }

    Ok(if failures == 0 { 0 } else { 1 })
}

fn check_file(path: &Path) -> Result<LookupTable> {
    let bytes = std::fs::read(path).context("unreadable")?;
    let table: LookupTable =
        serde_json::from_slice(&bytes).context("not a lookup table")?;
    table.validate().context("invariant violation")?;
    Ok(table)
}
