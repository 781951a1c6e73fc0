use crate::types::{Bar, PointValue, PriceField, SeriesPoint};

/// Arithmetic mean of the selected field across one window of bars.
///
/// A bar whose selected field is exactly `0.0` carries no data for that
/// period and is excluded from both the sum and the count. If the window is
/// empty, or every bar is excluded, the result is [`PointValue::Invalid`]; a
/// window that legitimately averages to zero stays `Computed(0.0)`.
///
/// Pure function of its inputs.
///
/// ```
/// use onda_core::{Bar, PointValue, PriceField, window_average};
/// use chrono::{DateTime, Utc};
///
/// fn bar(sec: i64, close: f64) -> Bar {
///     let time = DateTime::from_timestamp(sec, 0).unwrap();
///     Bar { time, open: close, high: close, low: close, close, volume: 1.0 }
/// }
///
/// // The zero close is skipped entirely: (10 + 20) / 2, not (10 + 0 + 20) / 3.
/// let bars = [bar(0, 10.0), bar(60, 0.0), bar(120, 20.0)];
/// assert_eq!(window_average(&bars, PriceField::Close), PointValue::Computed(15.0));
///
/// assert_eq!(window_average(&[], PriceField::Close), PointValue::Invalid);
/// ```
#[must_use]
pub fn window_average(bars: &[Bar], field: PriceField) -> PointValue {
    let mut total = 0.0;
    let mut count = 0usize;
    for bar in bars {
        let price = bar.price(field);
        if price == 0.0 {
            continue;
        }
        total += price;
        count += 1;
    }
    if count == 0 {
        return PointValue::Invalid;
    }
    #[allow(clippy::cast_precision_loss)]
    PointValue::Computed(total / count as f64)
}

/// Average one window of bars into a [`SeriesPoint`].
///
/// The point is attributed to the time of the **last** bar in the window,
/// the end of the window rather than its start. Returns `None` for an empty
/// window, which has no time to attribute the point to.
#[must_use]
pub fn point(bars: &[Bar], field: PriceField) -> Option<SeriesPoint> {
    let last = bars.last()?;
    Some(SeriesPoint {
        time: last.time,
        value: window_average(bars, field),
    })
}
