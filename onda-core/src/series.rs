//! Ordered series container with unique, ascending time keys.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Period, PointValue, SeriesPoint};

/// An ordered mapping from period boundary to point value.
///
/// Keys are unique and iterate in ascending time order. Inserting at an
/// existing key overwrites the previous value, which is what makes repeated
/// recomputation converge instead of duplicating points. Point lookup is
/// O(log n); ordered iteration is O(n).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: BTreeMap<DateTime<Utc>, PointValue>,
}

impl Series {
    /// Create an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the value at `time`.
    pub fn set(&mut self, time: DateTime<Utc>, value: PointValue) {
        self.points.insert(time, value);
    }

    /// Value at `time`, if present.
    #[must_use]
    pub fn get(&self, time: DateTime<Utc>) -> Option<PointValue> {
        self.points.get(&time).copied()
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time of the earliest point, if any.
    #[must_use]
    pub fn first_time(&self) -> Option<DateTime<Utc>> {
        self.points.keys().next().copied()
    }

    /// Time of the latest point, if any.
    #[must_use]
    pub fn last_time(&self) -> Option<DateTime<Utc>> {
        self.points.keys().next_back().copied()
    }

    /// Iterate points in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, PointValue)> + '_ {
        self.points.iter().map(|(t, v)| (*t, *v))
    }

    /// Collect the series into a vector of points, ascending by time.
    #[must_use]
    pub fn to_points(&self) -> Vec<SeriesPoint> {
        self.iter()
            .map(|(time, value)| SeriesPoint { time, value })
            .collect()
    }

    /// Copy of this series restricted to `[start, end]`.
    #[must_use]
    pub fn slice(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            points: self
                .points
                .range(start..=end)
                .map(|(t, v)| (*t, *v))
                .collect(),
        }
    }

    /// First period boundary in `[start, end]` with no point, if any.
    ///
    /// `start` and `end` are rounded down to boundaries before scanning, so
    /// callers may pass raw request timestamps.
    #[must_use]
    pub fn first_gap(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        period: Period,
    ) -> Option<DateTime<Utc>> {
        let mut t = period.round_down(start);
        let end = period.round_down(end);
        while t <= end {
            if !self.points.contains_key(&t) {
                return Some(t);
            }
            t += period.duration();
        }
        None
    }

    /// Whether every boundary in `[start, end]` at step `period` has a point.
    #[must_use]
    pub fn is_complete(&self, start: DateTime<Utc>, end: DateTime<Utc>, period: Period) -> bool {
        self.first_gap(start, end, period).is_none()
    }

    /// Whether any point in `[start, end]` carries [`PointValue::Invalid`].
    #[must_use]
    pub fn has_invalid(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.points.range(start..=end).any(|(_, v)| v.is_invalid())
    }
}

impl FromIterator<(DateTime<Utc>, PointValue)> for Series {
    fn from_iter<I: IntoIterator<Item = (DateTime<Utc>, PointValue)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
