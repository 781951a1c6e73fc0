//! In-memory implementations of the onda boundary traits.
//!
//! `MemoryStore` is a full `CacheStore` over a map; `MockBarSource` serves
//! deterministic bars, from static fixtures for known pairs and from a
//! synthetic price function for everything else, so tests can anchor ranges
//! at any instant (including "now").

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use onda_core::connector::BarSource;
use onda_core::{Bar, OndaError, Period};

mod fixtures;
mod store;

pub use store::MemoryStore;

/// Bar source for CI-safe tests and examples. Provides deterministic data:
/// static fixtures for known pairs, synthetic bars for every other pair.
pub struct MockBarSource;

impl Default for MockBarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBarSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(exchange: &str) -> Result<(), OndaError> {
        if exchange == "FAIL" {
            return Err(OndaError::upstream("onda-mock", "forced failure: bars"));
        }
        Ok(())
    }

    /// Deterministic nonzero price for a boundary; repeats on a long cycle so
    /// any range stays bounded and reproducible.
    fn synthetic_close(ts: i64) -> f64 {
        1000.0 + ((ts / 60).rem_euclid(360)) as f64 * 0.25
    }

    fn synthetic_bars(period: Period, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Bar> {
        let mut bars = Vec::new();
        let mut t = period.round_down(start);
        while t <= end {
            let close = Self::synthetic_close(t.timestamp());
            bars.push(Bar {
                time: t,
                open: close - 0.10,
                high: close + 0.15,
                low: close - 0.20,
                close,
                volume: 42.0,
            });
            t += period.duration();
        }
        bars
    }
}

#[async_trait]
impl BarSource for MockBarSource {
    async fn fetch_bars(
        &self,
        exchange: &str,
        pair: &str,
        period: Period,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Bar>, OndaError> {
        Self::maybe_fail(exchange)?;
        if let Some(bars) = fixtures::bars::by_pair(pair) {
            // Fixture pairs cover a fixed window; bars outside [start, end]
            // are dropped and gaps surface downstream as InsufficientData.
            return Ok(bars
                .into_iter()
                .filter(|b| b.time >= start && b.time <= end)
                .collect());
        }
        Ok(Self::synthetic_bars(period, start, end))
    }

    fn name(&self) -> &'static str {
        "onda-mock"
    }
}
