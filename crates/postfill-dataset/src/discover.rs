//! # Dataset Discovery
//!
//! Enumerate the datasets a deployment ships: scan a data directory for
//! `{cc}.json` files, parse and validate each, and report what is actually
//! servable. This is what an admin surface lists when offering countries to
//! enable — a file that does not parse is not offered.

use std::path::{Path, PathBuf};

use postfill_core::{CountryCode, LookupTable};

/// One servable dataset found on disk.
#[derive(Debug, Clone)]
pub struct DiscoveredDataset {
    /// Country the dataset covers (from the file's `country` field).
    pub country: CountryCode,
    /// Path of the dataset file.
    pub path: PathBuf,
    /// Number of postcode entries.
    pub entry_count: usize,
}

/// Scan `data_dir` for valid dataset files, sorted by country code.
///
/// Files that are not `.json`, fail to parse, or violate the table
/// invariant are skipped (logged at debug), not reported as errors — a
/// half-broken data directory still serves its good datasets.
pub fn discover(data_dir: &Path) -> std::io::Result<Vec<DiscoveredDataset>> {
    let mut found = Vec::new();

    for dir_entry in std::fs::read_dir(data_dir)? {
        let path = dir_entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match load_dataset(&path) {
            Some(dataset) => found.push(dataset),
            None => {
                tracing::debug!(?path, "skipping unservable dataset file");
            }
        }
    }

    found.sort_by(|a, b| a.country.cmp(&b.country));
    Ok(found)
}

fn load_dataset(path: &Path) -> Option<DiscoveredDataset> {
    let bytes = std::fs::read(path).ok()?;
    let table: LookupTable = serde_json::from_slice(&bytes).ok()?;
    table.validate().ok()?;
    Some(DiscoveredDataset {
        country: table.country.clone(),
        path: path.to_path_buf(),
        entry_count: table.len(),
    })
}
