//! Per-slot occupancy records and time slots.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// What a worker is doing during one half-hour step of their shift.
///
/// A break always wins over training: a worker whose break falls inside a
/// training interval is recorded as [`SlotActivity::OnBreak`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotActivity {
    /// On the line and eligible for a work station.
    Available,
    /// In off-line training.
    Training,
    /// On the unpaid break.
    OnBreak,
}

/// One worker's state for one half-hour step of their shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyRecord {
    /// Absolute start of the step.
    pub at: NaiveDateTime,
    /// Worker display name.
    pub worker: String,
    /// What the worker is doing during the step.
    pub activity: SlotActivity,
}

impl OccupancyRecord {
    /// The time-of-day key used to group records into slots.
    pub fn time_of_day(&self) -> NaiveTime {
        self.at.time()
    }
}

/// A half-hour column of the schedule.
///
/// Slots are keyed by time of day; `index` is the 1-based position in
/// processing order and is the value recorded for recency comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Sequence index, increasing with processing order.
    pub index: usize,
    /// Time of day the slot starts.
    pub time: NaiveTime,
}

impl TimeSlot {
    /// Returns true at the top of a clock hour.
    pub fn is_top_of_hour(&self) -> bool {
        self.time.minute() == 0
    }

    /// Column label in 12-hour form without a leading zero, e.g. `9:00 AM`.
    ///
    /// # Example
    ///
    /// ```
    /// use station_rota::models::TimeSlot;
    /// use chrono::NaiveTime;
    ///
    /// let slot = TimeSlot { index: 1, time: NaiveTime::from_hms_opt(13, 30, 0).unwrap() };
    /// assert_eq!(slot.label(), "1:30 PM");
    /// ```
    pub fn label(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}
