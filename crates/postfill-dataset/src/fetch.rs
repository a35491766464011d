//! # Dataset Fetchers
//!
//! The [`DatasetFetcher`] seam plus the two shipped implementations:
//! [`HttpFetcher`] for deployments serving dataset files over HTTP, and
//! [`DirFetcher`] for local data directories (the CLI's offline mode, and
//! the same layout an admin surface scans).
//!
//! Every fetcher validates the table before handing it out; a table that
//! parses but violates the state-index invariant is an error, never a
//! partially usable result.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use postfill_core::{CountryCode, LookupTable};

use crate::config::DataSourceConfig;
use crate::error::DatasetError;

/// One async call from country code to validated lookup table.
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, country: &CountryCode) -> Result<LookupTable, DatasetError>;
}

/// Fetches `{base_url}assets/data/{cc}.json`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Build a fetcher from configuration.
    pub fn new(config: DataSourceConfig) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(DatasetError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The per-country resource URL.
    pub fn dataset_url(&self, country: &CountryCode) -> String {
        format!("{}assets/data/{}.json", self.base_url, country.as_str())
    }
}

#[async_trait]
impl DatasetFetcher for HttpFetcher {
    async fn fetch(&self, country: &CountryCode) -> Result<LookupTable, DatasetError> {
        let url = self.dataset_url(country);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| DatasetError::Http {
                country: country.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(DatasetError::Status {
                country: country.clone(),
                status: resp.status().as_u16(),
            });
        }

        let table: LookupTable = resp.json().await.map_err(|source| DatasetError::Decode {
            country: country.clone(),
            source,
        })?;

        table
            .validate()
            .map_err(|source| DatasetError::Invalid {
                country: country.clone(),
                source,
            })?;

        Ok(table)
    }
}

/// Reads `{data_dir}/{cc}.json` from disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    data_dir: PathBuf,
}

impl DirFetcher {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The per-country dataset file path.
    pub fn dataset_path(&self, country: &CountryCode) -> PathBuf {
        self.data_dir.join(format!("{}.json", country.as_str()))
    }
}

#[async_trait]
impl DatasetFetcher for DirFetcher {
    async fn fetch(&self, country: &CountryCode) -> Result<LookupTable, DatasetError> {
        let path = self.dataset_path(country);

        let bytes = tokio::fs::read(&path).await.map_err(|source| DatasetError::Io {
            path: path.clone(),
            source,
        })?;

        let table: LookupTable =
            serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
                path: path.clone(),
                source,
            })?;

        table
            .validate()
            .map_err(|source| DatasetError::Invalid {
                country: country.clone(),
                source,
            })?;

        Ok(table)
    }
}
