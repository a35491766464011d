//! # Data-Source Configuration
//!
//! Where the deployment serves its dataset files from. Injected by the host
//! before the engine runs; override via environment variables for staging
//! and tests.

use url::Url;

/// Environment variable for the dataset base URL.
pub const ENV_BASE_URL: &str = "POSTFILL_BASE_URL";
/// Environment variable for the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "POSTFILL_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP dataset source.
///
/// `base_url` is the deployment root the dataset files hang off; the per
/// country resource is `{base_url}assets/data/{cc}.json`, so the base URL
/// should end with a trailing slash.
#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    /// Deployment root serving `assets/data/{cc}.json`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DataSourceConfig {
    /// Configuration with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the environment.
    ///
    /// Variables:
    /// - `POSTFILL_BASE_URL` (required)
    /// - `POSTFILL_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| ConfigError::MissingBaseUrl)?
            .parse::<Url>()?;
        let timeout_secs = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

/// Data-source configuration failure.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// `POSTFILL_BASE_URL` is not set.
    #[error("POSTFILL_BASE_URL is not set")]
    MissingBaseUrl,

    /// The base URL did not parse.
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The timeout was not a number of seconds.
    #[error("invalid POSTFILL_TIMEOUT_SECS value: {0:?}")]
    InvalidTimeout(String),
}
