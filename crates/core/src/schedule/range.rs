use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a time range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    #[error("Invalid time range: end must be after start")]
    InvalidRange,
}

/// A half-open interval `[start, end)` of instants.
///
/// Half-open semantics make adjacency unambiguous: an interval ending
/// exactly when another begins does not overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a time range, validating that `end > start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if end <= start {
            return Err(TimeRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// The full-day window `[00:00, next day 00:00)` for a calendar date.
    pub fn day(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// Returns true if the two intervals share any instant.
    ///
    /// Touching endpoints do not count: `[a, b)` and `[b, c)` are disjoint.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Truncates this interval to the bounds of `window`.
    ///
    /// Returns `None` when the interval lies entirely outside the window.
    pub fn clip(&self, window: &TimeRange) -> Option<TimeRange> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        (start < end).then_some(TimeRange { start, end })
    }

    /// Duration of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
