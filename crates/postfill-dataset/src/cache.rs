//! # Dataset Cache
//!
//! Process-wide memoization of per-country lookup tables. One load per
//! country per process lifetime:
//!
//! - a successful load is cached and shared (`Arc`);
//! - a failed load is cached as "no data" and **not retried** — absence of
//!   a dataset is a valid terminal state, and hammering a broken endpoint
//!   on every keystroke helps nobody;
//! - concurrent first lookups for the same country share a single in-flight
//!   fetch instead of racing duplicate requests.
//!
//! The cache map is append-only: entries are created lazily and never
//! evicted or replaced. A fresh process is the only reset.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

use postfill_core::{CountryCode, LookupTable};

use crate::fetch::DatasetFetcher;

type Slot = Arc<OnceCell<Option<Arc<LookupTable>>>>;

/// Memoizing front of a [`DatasetFetcher`].
pub struct DatasetCache {
    fetcher: Arc<dyn DatasetFetcher>,
    slots: Mutex<HashMap<CountryCode, Slot>>,
}

impl DatasetCache {
    pub fn new(fetcher: Arc<dyn DatasetFetcher>) -> Self {
        Self {
            fetcher,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Normalize raw input and look the table up. Returns `None` without
    /// touching the network when the input is not a two-letter code.
    pub async fn table_for(&self, raw_country: &str) -> Option<Arc<LookupTable>> {
        let country = CountryCode::normalize(raw_country)?;
        self.table(&country).await
    }

    /// The table for a country, loading it on first use.
    ///
    /// `None` means "no data for this country" — either the fetch failed
    /// earlier in this process, or it fails now. Both are cached.
    pub async fn table(&self, country: &CountryCode) -> Option<Arc<LookupTable>> {
        let slot = {
            let mut slots = self.slots.lock().unwrap();
            Arc::clone(slots.entry(country.clone()).or_default())
        };

        slot.get_or_init(|| async {
            match self.fetcher.fetch(country).await {
                Ok(table) => Some(Arc::new(table)),
                Err(error) => {
                    // Expected outcome, not a failure of the feature.
                    tracing::debug!(country = %country, %error, "dataset unavailable, caching as no-data");
                    None
                }
            }
        })
        .await
        .clone()
    }
}

impl std::fmt::Debug for DatasetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.lock().unwrap();
        f.debug_struct("DatasetCache")
            .field("countries", &slots.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::DatasetError;

    struct CountingFetcher {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingFetcher {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DatasetFetcher for CountingFetcher {
        async fn fetch(&self, country: &CountryCode) -> Result<LookupTable, DatasetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DatasetError::Status {
                    country: country.clone(),
                    status: 404,
                });
            }
            Ok(serde_json::from_str(
                r#"{"country": "MY", "states": ["Selangor"], "data": {"43000": ["Kajang", 0]}}"#,
            )
            .unwrap())
        }
    }

    #[tokio::test]
    async fn second_lookup_hits_the_cache() {
        let fetcher = Arc::new(CountingFetcher::ok());
        let cache = DatasetCache::new(Arc::clone(&fetcher) as Arc<dyn DatasetFetcher>);

        let first = cache.table_for("MY").await.unwrap();
        let second = cache.table_for("my").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fetcher.count(), 1);
    }

    #[tokio::test]
    async fn failure_is_cached_and_never_retried() {
        let fetcher = Arc::new(CountingFetcher::failing());
        let cache = DatasetCache::new(Arc::clone(&fetcher) as Arc<dyn DatasetFetcher>);

        assert!(cache.table_for("MY").await.is_none());
        assert!(cache.table_for("MY").await.is_none());
        assert_eq!(fetcher.count(), 1);
    }

    #[tokio::test]
    async fn invalid_country_input_never_reaches_the_fetcher() {
        let fetcher = Arc::new(CountingFetcher::ok());
        let cache = DatasetCache::new(Arc::clone(&fetcher) as Arc<dyn DatasetFetcher>);

        for raw in ["", "m", "mys", "12", "???"] {
            assert!(cache.table_for(raw).await.is_none());
        }
        assert_eq!(fetcher.count(), 0);
    }

    #[tokio::test]
    async fn concurrent_first_lookups_share_one_fetch() {
        let fetcher = Arc::new(CountingFetcher::ok());
        let cache = Arc::new(DatasetCache::new(
            Arc::clone(&fetcher) as Arc<dyn DatasetFetcher>
        ));

        let a = Arc::clone(&cache);
        let b = Arc::clone(&cache);
        let (left, right) = tokio::join!(a.table_for("MY"), b.table_for("MY"));
        assert!(left.is_some() && right.is_some());
        assert_eq!(fetcher.count(), 1);
    }
}
