use chrono::Utc;
use onda_core::{GenerateParams, OndaError, Series, SeriesKey, SmaRequest, evaluate, generate};

use crate::Onda;

impl Onda {
    /// Return the simple-moving-average series for the requested range.
    ///
    /// Behavior and trade-offs:
    /// - Validates the request before touching any boundary, then normalizes
    ///   `start`/`end` down to period boundaries so sub-period offsets resolve
    ///   to the same cached series.
    /// - Reads the cache and classifies the answer. A fresh answer is
    ///   returned verbatim with no write; a stale one triggers a full-range
    ///   recomputation from upstream bars followed by a single upsert.
    /// - Boundary failures and `InsufficientData` from generation are
    ///   surfaced to the caller, never retried here: the execution host owns
    ///   retry policy, and re-running the pipeline with identical inputs
    ///   converges to the same stored values.
    ///
    /// # Errors
    /// - `InvalidRequest` for a malformed request (no boundary is called).
    /// - `Cache` / `Upstream` when a boundary call fails.
    /// - `InsufficientData` when fetched bars do not cover the lookback-plus-
    ///   range window.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "onda::router::sma",
            skip(self, req),
            fields(
                exchange = %req.exchange,
                pair = %req.pair,
                period = %req.period,
                window = req.window_size,
            ),
        )
    )]
    pub async fn sma(&self, req: &SmaRequest) -> Result<Series, OndaError> {
        req.validate()?;
        let req = req.normalized();
        let key = req.key();

        let cached = self.store.read(&key, req.start, req.end).await?;
        let freshness = evaluate(&cached, &req, Utc::now());
        if freshness.is_fresh() {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %key, points = cached.len(), "cached series is up to date");
            return Ok(cached);
        }
        #[cfg(feature = "tracing")]
        if let onda_core::Freshness::Stale(reason) = freshness {
            tracing::debug!(key = %key, reason = %reason, "cached series is stale, recomputing");
        }

        self.recompute(&req, &key).await
    }

    /// Stale path: fetch the range plus one window of lookback, regenerate
    /// the full series, and write it back in a single idempotent upsert.
    async fn recompute(&self, req: &SmaRequest, key: &SeriesKey) -> Result<Series, OndaError> {
        let bars = self
            .source
            .fetch_bars(
                &req.exchange,
                &req.pair,
                req.period,
                req.lookback_start(),
                req.end,
            )
            .await?;

        let series = generate(GenerateParams {
            bars: &bars,
            price_field: req.price_field,
            start: req.start,
            end: req.end,
            window_size: req.window_size,
            period: req.period,
        })?;

        // The only write of the pipeline, and it happens strictly after
        // generation succeeded: a failed request leaves no partial series.
        self.store.upsert(key, &series).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %key, points = series.len(), "recomputed and upserted series");

        Ok(series)
    }
}
