//! # postfill-dataset — Dataset Fetching and Caching
//!
//! The data-source side of the autofill engine: fetch per-country postcode
//! lookup tables, cache them for the process lifetime, and discover which
//! datasets a deployment ships.
//!
//! ## Architecture
//!
//! - [`DatasetFetcher`] is the seam: one async call from country code to
//!   validated [`postfill_core::LookupTable`]. [`HttpFetcher`] is the
//!   production implementation (`GET {base}/assets/data/{cc}.json`);
//!   [`DirFetcher`] reads the same files from a local data directory.
//! - [`DatasetCache`] memoizes one load per country. Failures are cached as
//!   "no data" and never retried in-process — a missing dataset is a valid
//!   terminal state, not a transient error. Concurrent first lookups for a
//!   country share a single fetch.
//! - [`discover`] lists the datasets present in a data directory, the way
//!   an admin surface enumerates available countries.

pub mod cache;
pub mod config;
pub mod discover;
pub mod error;
pub mod fetch;

pub use cache::DatasetCache;
pub use config::{ConfigError, DataSourceConfig};
pub use discover::{discover, DiscoveredDataset};
pub use error::DatasetError;
pub use fetch::{DatasetFetcher, DirFetcher, HttpFetcher};
