//! Common data structures: bars, periods, price fields, requests, and points.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::connector::SeriesKey;
use crate::error::OndaError;

/// One OHLCV observation for a fixed period of an instrument.
///
/// Bars are provided by the upstream source and are never mutated by this
/// crate. A field equal to exactly `0.0` means "no data for this bar" and is
/// skipped by the averaging engine rather than treated as a price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Period boundary this bar belongs to.
    pub time: DateTime<Utc>,
    /// Opening price of the period.
    pub open: f64,
    /// Highest price of the period.
    pub high: f64,
    /// Lowest price of the period.
    pub low: f64,
    /// Closing price of the period.
    pub close: f64,
    /// Traded volume over the period.
    pub volume: f64,
}

impl Bar {
    /// Return the price selected by `field`.
    #[must_use]
    pub const fn price(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
        }
    }
}

/// Selects which [`Bar`] field feeds the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceField {
    /// Use the opening price.
    Open,
    /// Use the highest price.
    High,
    /// Use the lowest price.
    Low,
    /// Use the closing price.
    Close,
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for PriceField {
    type Err = OndaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            other => Err(OndaError::invalid_request(format!(
                "unknown price field: {other}"
            ))),
        }
    }
}

/// Symbolic duration between consecutive bars of an instrument.
///
/// Every variant maps to a fixed number of seconds; boundaries are multiples
/// of that step from the Unix epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// One minute.
    M1,
    /// Three minutes.
    M3,
    /// Five minutes.
    M5,
    /// Fifteen minutes.
    M15,
    /// Thirty minutes.
    M30,
    /// One hour.
    H1,
    /// Four hours.
    H4,
    /// Twelve hours.
    H12,
    /// One day.
    D1,
}

impl Period {
    /// Step between consecutive boundaries, in seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Self::M1 => 60,
            Self::M3 => 3 * 60,
            Self::M5 => 5 * 60,
            Self::M15 => 15 * 60,
            Self::M30 => 30 * 60,
            Self::H1 => 3600,
            Self::H4 => 4 * 3600,
            Self::H12 => 12 * 3600,
            Self::D1 => 86_400,
        }
    }

    /// Step between consecutive boundaries as a `chrono::Duration`.
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::seconds(self.seconds())
    }

    /// Round `t` down to the nearest period boundary.
    ///
    /// Rounding is idempotent: a timestamp already on a boundary is returned
    /// unchanged.
    ///
    /// ```
    /// use chrono::{DateTime, Utc};
    /// use onda_core::Period;
    ///
    /// let t: DateTime<Utc> = "2023-02-26T12:00:42Z".parse().unwrap();
    /// let rounded = Period::M1.round_down(t);
    /// assert_eq!(rounded, "2023-02-26T12:00:00Z".parse::<DateTime<Utc>>().unwrap());
    /// assert_eq!(Period::M1.round_down(rounded), rounded);
    /// ```
    #[must_use]
    pub fn round_down(self, t: DateTime<Utc>) -> DateTime<Utc> {
        let step = self.seconds();
        let ts = t.timestamp();
        let floored = ts - ts.rem_euclid(step);
        // Flooring a representable timestamp stays representable.
        DateTime::from_timestamp(floored, 0).unwrap_or(t)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::M1 => "M1",
            Self::M3 => "M3",
            Self::M5 => "M5",
            Self::M15 => "M15",
            Self::M30 => "M30",
            Self::H1 => "H1",
            Self::H4 => "H4",
            Self::H12 => "H12",
            Self::D1 => "D1",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Period {
    type Err = OndaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M1" => Ok(Self::M1),
            "M3" => Ok(Self::M3),
            "M5" => Ok(Self::M5),
            "M15" => Ok(Self::M15),
            "M30" => Ok(Self::M30),
            "H1" => Ok(Self::H1),
            "H4" => Ok(Self::H4),
            "H12" => Ok(Self::H12),
            "D1" => Ok(Self::D1),
            other => Err(OndaError::invalid_request(format!(
                "unknown period: {other}"
            ))),
        }
    }
}

/// The value carried by one series point.
///
/// `Invalid` marks a point whose computation could not produce a real
/// average (no usable bars in the window). It is distinct from
/// `Computed(0.0)`, which is a legitimately-zero average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointValue {
    /// A successfully computed average.
    Computed(f64),
    /// The window held no usable bars; the point must be recomputed later.
    Invalid,
}

impl PointValue {
    /// Return the computed value, or `None` for an invalid point.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Computed(v) => Some(v),
            Self::Invalid => None,
        }
    }

    /// Whether this point carries no usable value.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// One derived point of a moving-average series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Period boundary the point is attributed to (end of its window).
    pub time: DateTime<Utc>,
    /// The point's value.
    pub value: PointValue,
}

/// A request for a simple-moving-average series over a time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaRequest {
    /// Exchange the instrument trades on (e.g. `"binance"`).
    pub exchange: String,
    /// Instrument pair (e.g. `"ETH-USDT"`).
    pub pair: String,
    /// Duration between consecutive bars and series points.
    pub period: Period,
    /// Number of consecutive bars averaged into one point. Must be >= 1.
    pub window_size: u32,
    /// Which bar field feeds the average.
    pub price_field: PriceField,
    /// Start of the requested range (inclusive).
    pub start: DateTime<Utc>,
    /// End of the requested range (inclusive).
    pub end: DateTime<Utc>,
}

impl SmaRequest {
    /// Check that the required fields are filled and valid.
    ///
    /// # Errors
    /// Returns `InvalidRequest` naming the first offending field. Runs before
    /// any boundary call so a bad request never touches a collaborator.
    pub fn validate(&self) -> Result<(), OndaError> {
        if self.exchange.is_empty() {
            return Err(OndaError::invalid_request("exchange is required"));
        }
        if self.pair.is_empty() {
            return Err(OndaError::invalid_request("pair is required"));
        }
        if self.window_size == 0 {
            return Err(OndaError::invalid_request(
                "window_size must be greater than 0",
            ));
        }
        if self.end < self.start {
            return Err(OndaError::invalid_request(
                "end time must not be before start time",
            ));
        }
        Ok(())
    }

    /// Copy of this request with `start` and `end` rounded down to period
    /// boundaries.
    ///
    /// Two requests differing only by sub-period offsets normalize to the
    /// same request, so they resolve to the same cached series.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            start: self.period.round_down(self.start),
            end: self.period.round_down(self.end),
            ..self.clone()
        }
    }

    /// The instrument-level cache key this request addresses.
    #[must_use]
    pub fn key(&self) -> SeriesKey {
        SeriesKey {
            exchange: self.exchange.clone(),
            pair: self.pair.clone(),
            period: self.period,
            window_size: self.window_size,
            price_field: self.price_field,
        }
    }

    /// Start of the bar range needed to recompute the series: one window's
    /// worth of lookback before the requested start.
    #[must_use]
    pub fn lookback_start(&self) -> DateTime<Utc> {
        self.start - Duration::seconds(self.period.seconds() * i64::from(self.window_size))
    }
}
