//! # Lookup Tables
//!
//! Wire model for the per-country postcode dataset. One table per country,
//! loaded from `assets/data/{cc}.json`:
//!
//! ```json
//! {
//!   "country": "MY",
//!   "states": ["Selangor", "Johor"],
//!   "data": { "43000": ["Kajang", 0] }
//! }
//! ```
//!
//! Entries map a postcode (exact string key) to a locality name plus an
//! index into `states`. Tables are immutable after load.
//!
//! ## Invariant
//!
//! Every state index is a valid position into `states`. [`LookupTable::validate`]
//! enforces this; loaders treat a failing table as "no data" rather than
//! serving it partially.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::error::TableError;

/// A single postcode entry: locality name plus an index into the owning
/// table's state list. Serialized as the two-element array `["Kajang", 0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry(pub String, pub usize);

impl TableEntry {
    /// The locality (city/town) name.
    pub fn locality(&self) -> &str {
        &self.0
    }

    /// Position of the entry's state in the table's state list.
    pub fn state_index(&self) -> usize {
        self.1
    }
}

/// A resolved postcode match, borrowing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    /// Locality name to write into the city field.
    pub locality: &'a str,
    /// Canonical state name, resolved through the entry's state index.
    pub state: &'a str,
}

/// Per-country postcode lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupTable {
    /// Country this table covers.
    pub country: CountryCode,
    /// Ordered canonical region names, referenced by index from `entries`.
    pub states: Vec<String>,
    /// Postcode → entry mapping. Exact-match keys only.
    #[serde(rename = "data")]
    pub entries: HashMap<String, TableEntry>,
}

impl LookupTable {
    /// Check the structural invariant: every entry's state index points
    /// into `states`.
    pub fn validate(&self) -> Result<(), TableError> {
        for (postcode, entry) in &self.entries {
            if entry.state_index() >= self.states.len() {
                return Err(TableError::StateIndexOutOfRange {
                    postcode: postcode.clone(),
                    index: entry.state_index(),
                    state_count: self.states.len(),
                });
            }
        }
        Ok(())
    }

    /// Exact-match lookup of a postcode.
    ///
    /// Returns `None` on a miss or when the entry's state index is out of
    /// range — callers never observe a half-resolved match.
    pub fn resolve(&self, postcode: &str) -> Option<ResolvedEntry<'_>> {
        let entry = self.entries.get(postcode)?;
        let state = self.states.get(entry.state_index())?;
        Some(ResolvedEntry {
            locality: entry.locality(),
            state,
        })
    }

    /// Number of postcode entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
