use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OndaError;
use crate::series::Series;
use crate::types::{Bar, Period, PriceField};

/// Identity of one stored series: everything that discriminates a cached
/// answer except time.
///
/// Together with a point's time this forms the natural primary key of the
/// persistent cache; recomputation and storage are idempotent under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesKey {
    /// Exchange the instrument trades on.
    pub exchange: String,
    /// Instrument pair.
    pub pair: String,
    /// Duration between consecutive points.
    pub period: Period,
    /// Number of bars averaged into one point.
    pub window_size: u32,
    /// Which bar field feeds the average.
    pub price_field: PriceField,
}

impl std::fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.exchange, self.pair, self.period, self.window_size, self.price_field
        )
    }
}

/// Boundary trait for the persistent series cache.
///
/// Implementations are injected into the orchestrator rather than reached
/// through a global, which is what lets tests substitute in-memory fakes.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read the cached series for `key` restricted to `[start, end]`.
    ///
    /// The result is ordered and deduplicated; a boundary with no stored
    /// point is simply absent from the result, never a placeholder.
    ///
    /// # Errors
    /// Returns `Cache` if the underlying store fails. The pipeline surfaces
    /// this to the caller without retrying.
    async fn read(
        &self,
        key: &SeriesKey,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Series, OndaError>;

    /// Insert or update every point of `series` under `key`.
    ///
    /// Must be idempotent per `(key, time)`: re-writing an existing point
    /// with the same value is observationally a no-op, and a later write at
    /// the same point wins. This is what keeps at-least-once re-invocations
    /// of the pipeline convergent.
    ///
    /// # Errors
    /// Returns `Cache` if the underlying store fails.
    async fn upsert(&self, key: &SeriesKey, series: &Series) -> Result<(), OndaError>;

    /// Store name for error tagging and logging.
    fn name(&self) -> &'static str;
}

/// Boundary trait for the upstream source of raw price bars.
#[async_trait]
pub trait BarSource: Send + Sync {
    /// Fetch one bar per period boundary in `[start, end]`, ascending, with
    /// no gaps.
    ///
    /// # Errors
    /// Returns `Upstream` if the source fails or cannot cover the range.
    async fn fetch_bars(
        &self,
        exchange: &str,
        pair: &str,
        period: Period,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Bar>, OndaError>;

    /// Source name for error tagging and logging.
    fn name(&self) -> &'static str;
}
