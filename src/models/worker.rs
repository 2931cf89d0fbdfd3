//! Worker model and related types.
//!
//! A [`Worker`] carries already-normalized intervals: every time is an
//! absolute [`NaiveDateTime`] on the intake reference date, with overnight
//! wraparound applied.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive start of the interval.
    pub start: NaiveDateTime,
    /// Exclusive end of the interval.
    pub end: NaiveDateTime,
}

impl Interval {
    /// Creates an interval, assuming an end before the start wraps past midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_rota::models::Interval;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("1970-01-01 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("1970-01-01 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let overnight = Interval::new(start, end);
    /// assert_eq!(overnight.duration_minutes(), 240);
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let end = if end < start {
            end + Duration::days(1)
        } else {
            end
        };
        Self { start, end }
    }

    /// Creates an interval of `minutes` length starting at `start`.
    pub fn starting_at(start: NaiveDateTime, minutes: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(minutes),
        }
    }

    /// Returns true if `at` falls inside `[start, end)`.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }

    /// Returns true if the interval covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Length of the interval in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns the same interval moved by whole days.
    pub fn shifted_days(&self, days: i64) -> Self {
        Self {
            start: self.start + Duration::days(days),
            end: self.end + Duration::days(days),
        }
    }
}

/// A worker with normalized shift, break and training intervals.
///
/// Absent intervals are `None` (or an empty training list); they simply
/// contribute nothing to slot expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Display name (first name plus last initial).
    pub name: String,
    /// The shift, if both bounds were readable.
    pub shift: Option<Interval>,
    /// The unpaid break window, if a break start was readable.
    pub break_window: Option<Interval>,
    /// Off-line training intervals.
    #[serde(default)]
    pub training: Vec<Interval>,
}

impl Worker {
    /// Returns true if the worker is on break at `at`.
    pub fn on_break_at(&self, at: NaiveDateTime) -> bool {
        self.break_window.is_some_and(|b| b.contains(at))
    }

    /// Returns true if any training interval covers `at`.
    pub fn in_training_at(&self, at: NaiveDateTime) -> bool {
        self.training.iter().any(|t| t.contains(at))
    }
}
