//! # Dataset Errors
//!
//! Failure modes of dataset loading. None of these surface to shoppers —
//! the cache swallows them into its "no data" marker — but they carry full
//! context for logs and for the CLI, which does report them.

use std::path::PathBuf;

use thiserror::Error;

use postfill_core::{CountryCode, TableError};

/// A dataset load failed.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// HTTP client construction failed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request itself failed (DNS, connect, timeout).
    #[error("request for {country} dataset failed: {source}")]
    Http {
        country: CountryCode,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("dataset for {country} returned status {status}")]
    Status { country: CountryCode, status: u16 },

    /// The response body was not a well-formed lookup table.
    #[error("dataset for {country} failed to decode: {source}")]
    Decode {
        country: CountryCode,
        #[source]
        source: reqwest::Error,
    },

    /// A local dataset file could not be read.
    #[error("dataset file {path:?} unreadable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A local dataset file did not parse as a lookup table.
    #[error("dataset file {path:?} failed to parse: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The table parsed but violates the state-index invariant.
    #[error("dataset for {country} is structurally invalid: {source}")]
    Invalid {
        country: CountryCode,
        #[source]
        source: TableError,
    },
}
