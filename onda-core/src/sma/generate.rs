use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::error::OndaError;
use crate::series::Series;
use crate::sma::point::window_average;
use crate::types::{Bar, Period, PriceField};

/// Inputs for [`generate`].
#[derive(Debug, Clone, Copy)]
pub struct GenerateParams<'a> {
    /// Bars covering `[start - window_size * period, end]` contiguously at
    /// period granularity. Extra bars outside that range are ignored.
    pub bars: &'a [Bar],
    /// Which bar field feeds the average.
    pub price_field: PriceField,
    /// First boundary of the output series (inclusive).
    pub start: DateTime<Utc>,
    /// Last boundary of the output series (inclusive).
    pub end: DateTime<Utc>,
    /// Number of consecutive bars averaged into one point. Must be >= 1.
    pub window_size: u32,
    /// Step between consecutive bars and output points.
    pub period: Period,
}

/// Slide a fixed-width window of bars across `[start, end]` and produce one
/// point per period boundary.
///
/// The point at boundary `t` averages the `window_size` bars ending at `t`
/// (bars at `t - (window_size - 1) * period, ..., t`). The window has fixed
/// width and steps one period at a time; this is not a cumulative or
/// exponentially-weighted average. The output holds exactly
/// `(end - start) / period + 1` points in ascending order.
///
/// Pure function of its inputs.
///
/// # Errors
/// - `InvalidRequest` if `window_size` is zero or `end` precedes `start`.
/// - `InsufficientData` if any boundary in
///   `[start - window_size * period, end]` has no bar; retrying with the
///   same bars cannot help, so the condition is propagated to the caller.
pub fn generate(params: GenerateParams<'_>) -> Result<Series, OndaError> {
    let GenerateParams {
        bars,
        price_field,
        start,
        end,
        window_size,
        period,
    } = params;

    if window_size == 0 {
        return Err(OndaError::invalid_request(
            "window_size must be greater than 0",
        ));
    }
    let start = period.round_down(start);
    let end = period.round_down(end);
    if end < start {
        return Err(OndaError::invalid_request(
            "end time must not be before start time",
        ));
    }

    let by_time: BTreeMap<DateTime<Utc>, &Bar> = bars.iter().map(|b| (b.time, b)).collect();

    // Collect one bar per boundary over the lookback-extended range; the
    // first gap fails the whole generation.
    let lookback =
        start - chrono::Duration::seconds(period.seconds() * i64::from(window_size));
    let mut aligned: Vec<Bar> = Vec::new();
    let mut t = lookback;
    while t <= end {
        match by_time.get(&t) {
            Some(bar) => aligned.push(**bar),
            None => return Err(OndaError::insufficient_data(t)),
        }
        t += period.duration();
    }

    // aligned[i] sits at lookback + i * period, so the window ending at the
    // j-th output boundary covers indices [j + 1, j + window_size].
    let window = window_size as usize;
    let mut series = Series::new();
    let outputs = aligned.len() - window;
    for j in 0..outputs {
        let slice = &aligned[j + 1..=j + window];
        let time = slice[window - 1].time;
        series.set(time, window_average(slice, price_field));
    }

    Ok(series)
}
