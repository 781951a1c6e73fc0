use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use onda_core::connector::{CacheStore, SeriesKey};
use onda_core::{OndaError, Series};

/// In-memory `CacheStore` keyed exactly like the recommended persistent
/// representation: one value per `(series key, time)`.
///
/// Upserts merge point-by-point into the stored series, so re-writing an
/// existing point with the same value is a no-op and a later write at the
/// same point wins.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<SeriesKey, Series>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points stored under `key`, across all times.
    pub async fn stored_len(&self, key: &SeriesKey) -> usize {
        let guard = self.rows.lock().await;
        guard.get(key).map_or(0, Series::len)
    }

    /// Drop everything; the next read sees an empty cache.
    pub async fn reset(&self) {
        let mut guard = self.rows.lock().await;
        guard.clear();
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn read(
        &self,
        key: &SeriesKey,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Series, OndaError> {
        let guard = self.rows.lock().await;
        Ok(guard
            .get(key)
            .map_or_else(Series::new, |s| s.slice(start, end)))
    }

    async fn upsert(&self, key: &SeriesKey, series: &Series) -> Result<(), OndaError> {
        let mut guard = self.rows.lock().await;
        let stored = guard.entry(key.clone()).or_default();
        for (time, value) in series.iter() {
            stored.set(time, value);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "onda-mock-memory"
    }
}
