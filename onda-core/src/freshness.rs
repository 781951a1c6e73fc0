use chrono::{DateTime, Utc};

use crate::series::Series;
use crate::types::SmaRequest;

/// Why a cached series cannot satisfy a request as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// Some boundary in the requested range has no cached point.
    MissingPoints,
    /// The last requested boundary is the current, still-forming period; its
    /// bar can still change upstream, so any cached value is provisional.
    CurrentPeriod,
    /// A cached point in range is invalid and must be recomputed.
    InvalidValues,
}

impl std::fmt::Display for StaleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::MissingPoints => "missing points",
            Self::CurrentPeriod => "range ends at the current period",
            Self::InvalidValues => "invalid values",
        };
        f.write_str(s)
    }
}

/// Classification of a cached series against a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The cached series answers the request as-is.
    Fresh,
    /// The cached series must be recomputed, for the given reason.
    Stale(StaleReason),
}

impl Freshness {
    /// Whether the cached series answers the request as-is.
    #[must_use]
    pub const fn is_fresh(self) -> bool {
        matches!(self, Self::Fresh)
    }
}

/// Classify a cached series read against the requested range.
///
/// The three staleness conditions are independent and ORed; any one failing
/// forces a full recomputation rather than a partial patch, trading some
/// redundant work for a simpler refresh protocol. The cached series is never
/// mutated.
///
/// The reported reason is the first condition that fails, checked in the
/// order: gap, in-flight boundary, invalid value.
#[must_use]
pub fn evaluate(cached: &Series, req: &SmaRequest, now: DateTime<Utc>) -> Freshness {
    let start = req.period.round_down(req.start);
    let end = req.period.round_down(req.end);

    if !cached.is_complete(start, end, req.period) {
        return Freshness::Stale(StaleReason::MissingPoints);
    }
    if end == req.period.round_down(now) {
        return Freshness::Stale(StaleReason::CurrentPeriod);
    }
    if cached.has_invalid(start, end) {
        return Freshness::Stale(StaleReason::InvalidValues);
    }
    Freshness::Fresh
}
