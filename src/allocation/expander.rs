//! Slot expansion.
//!
//! Each worker's shift is walked in half-hour steps, producing one
//! [`OccupancyRecord`] per step. Records are later grouped by time of day:
//! the schedule covers a single day, so the same time of day on two
//! calendar dates lands in the same slot.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::{OccupancyRecord, SlotActivity, TimeSlot, Worker};

/// Length of one schedule slot.
pub const SLOT_MINUTES: i64 = 30;

/// Expands one worker into per-slot occupancy records.
///
/// Steps run from shift start (inclusive) to shift end (exclusive). A step
/// inside the break window is [`SlotActivity::OnBreak`] even when it also
/// falls inside training.
///
/// # Example
///
/// ```
/// use station_rota::allocation::expand_worker;
/// use station_rota::intake::{normalize_worker, WorkerInput};
/// use station_rota::models::SlotActivity;
///
/// let worker = normalize_worker(1, &WorkerInput {
///     name: "Jane Doe".to_string(),
///     shift_start: Some("9:00 AM".to_string()),
///     shift_end: Some("11:00 AM".to_string()),
///     break_start: Some("10:00 AM".to_string()),
///     training: vec![],
/// }, 30).unwrap();
///
/// let records = expand_worker(&worker);
/// assert_eq!(records.len(), 4);
/// assert_eq!(records[2].activity, SlotActivity::OnBreak);
/// ```
pub fn expand_worker(worker: &Worker) -> Vec<OccupancyRecord> {
    let Some(shift) = worker.shift else {
        return Vec::new();
    };

    let step = Duration::minutes(SLOT_MINUTES);
    let mut records = Vec::new();
    let mut at = shift.start;
    while at < shift.end {
        let activity = if worker.on_break_at(at) {
            SlotActivity::OnBreak
        } else if worker.in_training_at(at) {
            SlotActivity::Training
        } else {
            SlotActivity::Available
        };
        records.push(OccupancyRecord {
            at,
            worker: worker.name.clone(),
            activity,
        });
        at += step;
    }
    records
}

/// Expands every worker; the result is in worker order, then time order.
pub fn expand_workers(workers: &[Worker]) -> Vec<OccupancyRecord> {
    workers.iter().flat_map(expand_worker).collect()
}

/// Builds the ordered, deduplicated slot list for a set of records.
///
/// Slots are keyed by time of day and ordered by the earliest absolute
/// time at which each key occurs, so an overnight run reads 10 PM before
/// 12 AM. Indices start at 1.
pub fn build_slots(records: &[OccupancyRecord]) -> Vec<TimeSlot> {
    let mut first_seen: HashMap<NaiveTime, NaiveDateTime> = HashMap::new();
    for record in records {
        first_seen
            .entry(record.time_of_day())
            .and_modify(|at| *at = (*at).min(record.at))
            .or_insert(record.at);
    }

    let mut keyed: Vec<(NaiveDateTime, NaiveTime)> =
        first_seen.into_iter().map(|(time, at)| (at, time)).collect();
    keyed.sort();

    keyed
        .into_iter()
        .enumerate()
        .map(|(i, (_, time))| TimeSlot { index: i + 1, time })
        .collect()
}
