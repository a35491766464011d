//! # Error Types
//!
//! Errors for the core domain types. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Note that most "failures" in this domain (postcode not found, field not
//! present, dataset unavailable) are modeled as `Option`, not as errors —
//! they are expected outcomes. The types here cover genuinely malformed
//! input: bad country codes and structurally invalid lookup tables.

use thiserror::Error;

/// Input could not be normalized into a two-letter country code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a two-letter country code: {input:?}")]
pub struct InvalidCountryCode {
    /// The rejected input, verbatim.
    pub input: String,
}

/// Structural validation failure for a lookup table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An entry references a state index past the end of the state list.
    #[error("postcode {postcode:?} references state index {index}, but the table has {state_count} states")]
    StateIndexOutOfRange {
        /// Postcode key of the offending entry.
        postcode: String,
        /// The out-of-range index.
        index: usize,
        /// Number of states the table actually declares.
        state_count: usize,
    },
}
