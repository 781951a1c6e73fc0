//! Shared test doubles for the integration suites.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{DateTime, Utc};
use onda::{Bar, BarSource, CacheStore, OndaError, Period, Series, SeriesKey};
use onda_mock::{MemoryStore, MockBarSource};

/// Bar source wrapper that counts every fetch, so tests can assert whether
/// a request reached upstream.
pub struct CountingBarSource {
    inner: MockBarSource,
    count: Arc<AtomicUsize>,
}

impl CountingBarSource {
    pub fn new(count: Arc<AtomicUsize>) -> Self {
        Self {
            inner: MockBarSource::new(),
            count,
        }
    }
}

#[async_trait::async_trait]
impl BarSource for CountingBarSource {
    async fn fetch_bars(
        &self,
        exchange: &str,
        pair: &str,
        period: Period,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Bar>, OndaError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_bars(exchange, pair, period, start, end).await
    }

    fn name(&self) -> &'static str {
        "counting-source"
    }
}

/// Store wrapper that counts every read and upsert.
#[allow(dead_code)]
pub struct CountingStore {
    inner: MemoryStore,
    count: Arc<AtomicUsize>,
}

impl CountingStore {
    #[allow(dead_code)]
    pub fn new(count: Arc<AtomicUsize>) -> Self {
        Self {
            inner: MemoryStore::new(),
            count,
        }
    }
}

#[async_trait::async_trait]
impl CacheStore for CountingStore {
    async fn read(
        &self,
        key: &SeriesKey,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Series, OndaError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.read(key, start, end).await
    }

    async fn upsert(&self, key: &SeriesKey, series: &Series) -> Result<(), OndaError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.upsert(key, series).await
    }

    fn name(&self) -> &'static str {
        "counting-store"
    }
}
