//! # Engine Settings
//!
//! The externally supplied configuration the engine reads: which countries
//! autofill is active for, and whether the host form should present postcode
//! before city/state. Persistence belongs to the host platform; this module
//! only models the values and their defaults.
//!
//! Absence of configuration is default-safe: no enabled-country list means
//! `{MY}`, no reorder preference means reordering on. Nothing here is ever
//! fatal to the engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

/// Environment variable naming the enabled countries (comma-separated).
pub const ENV_COUNTRIES: &str = "POSTFILL_COUNTRIES";
/// Environment variable for the field-reorder toggle.
pub const ENV_REORDER_FIELDS: &str = "POSTFILL_REORDER_FIELDS";

/// Engine-facing settings. Read-only from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Countries autofill is active for.
    pub enabled_countries: BTreeSet<CountryCode>,
    /// Whether address fields are presented postcode-first.
    pub reorder_fields: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_countries: BTreeSet::from([CountryCode::default()]),
            reorder_fields: true,
        }
    }
}

impl Settings {
    /// Build settings from an explicit country list and toggle. An empty
    /// list falls back to the default set — an engine with zero enabled
    /// countries is never what a misconfigured host meant.
    pub fn new(countries: impl IntoIterator<Item = CountryCode>, reorder_fields: bool) -> Self {
        let enabled_countries: BTreeSet<CountryCode> = countries.into_iter().collect();
        if enabled_countries.is_empty() {
            Self {
                reorder_fields,
                ..Self::default()
            }
        } else {
            Self {
                enabled_countries,
                reorder_fields,
            }
        }
    }

    /// Load settings from the environment.
    ///
    /// - `POSTFILL_COUNTRIES`: comma-separated codes (`"MY,SG"`). Codes that
    ///   fail normalization are skipped. Missing or empty means `{MY}`.
    /// - `POSTFILL_REORDER_FIELDS`: `yes`/`no` (also `true`/`false`/`1`/`0`).
    ///   Missing means yes.
    pub fn from_env() -> Self {
        let countries = std::env::var(ENV_COUNTRIES)
            .map(|raw| Self::parse_countries(&raw))
            .unwrap_or_default();
        let reorder = std::env::var(ENV_REORDER_FIELDS)
            .map(|raw| parse_toggle(&raw))
            .unwrap_or(true);
        Self::new(countries, reorder)
    }

    /// Parse a comma-separated country list, dropping entries that do not
    /// normalize.
    pub fn parse_countries(raw: &str) -> Vec<CountryCode> {
        raw.split(',')
            .filter_map(|item| CountryCode::normalize(item))
            .collect()
    }

    /// Whether autofill is active for the given country.
    pub fn is_enabled(&self, country: &CountryCode) -> bool {
        self.enabled_countries.contains(country)
    }
}

fn parse_toggle(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "no" | "false" | "0" | "off"
    )
}
