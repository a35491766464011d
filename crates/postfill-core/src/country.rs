//! # Country Codes
//!
//! Validated two-letter country code newtype. All dataset lookups and
//! enabled-country checks flow through [`CountryCode`]; no bare strings.
//!
//! Normalization is forgiving about input shape (`"MY"`, `"my"`, `" m-y "`)
//! and strict about the result: after lowercasing and dropping everything
//! that is not an ASCII letter, exactly two letters must remain.
//!
//! The lowercase form is the storage and URL form (dataset files are named
//! `my.json`); `Display` renders the conventional uppercase form used in
//! settings and admin surfaces.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidCountryCode;

/// A normalized ISO 3166-1 alpha-2 country code.
///
/// Always two lowercase ASCII letters internally. Construct via
/// [`CountryCode::normalize`] or `FromStr`; both apply the same rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalize arbitrary input into a country code.
    ///
    /// Lowercases, strips every non-ASCII-letter, and accepts the result
    /// only if exactly two letters remain. Returns `None` otherwise — the
    /// caller decides whether that is an error or a silent skip.
    pub fn normalize(input: &str) -> Option<Self> {
        let cleaned: String = input
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        (cleaned.len() == 2).then_some(Self(cleaned))
    }

    /// The lowercase code, e.g. `"my"`. This is the dataset file-name form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The conventional uppercase form, e.g. `"MY"`.
    pub fn to_uppercase(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

/// The fallback country used when the host form exposes no country control.
impl Default for CountryCode {
    fn default() -> Self {
        Self("my".to_string())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uppercase())
    }
}

impl FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| InvalidCountryCode { input: s.to_string() })
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Wire convention is uppercase ("country": "MY").
        serializer.serialize_str(&self.to_uppercase())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::normalize(&raw)
            .ok_or_else(|| de::Error::custom(format!("not a two-letter country code: {raw:?}")))
    }
}
