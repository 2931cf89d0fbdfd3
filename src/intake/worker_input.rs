//! Worker input records and their normalization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Interval, Worker};

use super::time_parse::{on_reference_date, parse_time_of_day};

/// Length of the unpaid break when no configuration overrides it.
pub const DEFAULT_BREAK_MINUTES: i64 = 30;

/// An off-line training interval as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingInput {
    /// Training start time text.
    #[serde(default)]
    pub start: Option<String>,
    /// Training end time text.
    #[serde(default)]
    pub end: Option<String>,
}

/// A worker record as gathered by the input front end.
///
/// Every time field is free text; see
/// [`parse_time_of_day`](super::parse_time_of_day) for what is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerInput {
    /// Full name, e.g. "Jane Doe".
    pub name: String,
    /// Shift start time text.
    #[serde(default)]
    pub shift_start: Option<String>,
    /// Shift end time text.
    #[serde(default)]
    pub shift_end: Option<String>,
    /// Unpaid break start time text.
    #[serde(default)]
    pub break_start: Option<String>,
    /// Off-line training intervals.
    #[serde(default)]
    pub training: Vec<TrainingInput>,
}

/// Shortens a full name to first name plus last initial.
///
/// # Examples
///
/// ```
/// use station_rota::intake::display_name;
///
/// assert_eq!(display_name("Jane Doe"), "Jane D.");
/// assert_eq!(display_name("Mary Ann Smith"), "Mary A.");
/// assert_eq!(display_name("Prince"), "Prince");
/// ```
pub fn display_name(full: &str) -> String {
    let full = full.trim();
    match full.split_once(char::is_whitespace) {
        Some((first, rest)) => match rest.trim_start().chars().next() {
            Some(initial) => format!("{} {}.", first, initial),
            None => first.to_string(),
        },
        None => full.to_string(),
    }
}

fn parse_field(value: Option<&str>) -> Option<NaiveDateTime> {
    value.and_then(parse_time_of_day).map(on_reference_date)
}

/// Moves an interval that starts before the shift onto the shift's timeline.
///
/// Overnight shifts end on the following day, so a break entered as
/// `1:00 AM` belongs to that day rather than the reference date.
fn align_to_shift(interval: Interval, shift: Option<Interval>) -> Interval {
    match shift {
        Some(shift) if interval.start < shift.start => {
            let moved = interval.shifted_days(1);
            if moved.start < shift.end { moved } else { interval }
        }
        _ => interval,
    }
}

/// Normalizes one worker record.
///
/// `index` is the 1-based position of the record, used in error messages.
/// Unreadable time fields leave the corresponding interval absent.
///
/// # Examples
///
/// ```
/// use station_rota::intake::{normalize_worker, WorkerInput};
///
/// let input = WorkerInput {
///     name: "Jane Doe".to_string(),
///     shift_start: Some("10:00 PM".to_string()),
///     shift_end: Some("2:00 AM".to_string()),
///     break_start: Some("12:30 AM".to_string()),
///     training: vec![],
/// };
///
/// let worker = normalize_worker(1, &input, 30).unwrap();
/// assert_eq!(worker.name, "Jane D.");
/// assert_eq!(worker.shift.unwrap().duration_minutes(), 240);
/// assert_eq!(worker.break_window.unwrap().start.to_string(), "1970-01-02 00:30:00");
/// ```
pub fn normalize_worker(
    index: usize,
    input: &WorkerInput,
    break_minutes: i64,
) -> EngineResult<Worker> {
    if input.name.trim().is_empty() {
        return Err(EngineError::InvalidWorker {
            index,
            message: "name is missing".to_string(),
        });
    }
    let name = display_name(&input.name);

    let shift = match (
        parse_field(input.shift_start.as_deref()),
        parse_field(input.shift_end.as_deref()),
    ) {
        (Some(start), Some(end)) => Some(Interval::new(start, end)),
        _ => {
            debug!(worker = %name, "shift bounds absent; worker contributes no slots");
            None
        }
    };

    let break_window = parse_field(input.break_start.as_deref())
        .map(|start| align_to_shift(Interval::starting_at(start, break_minutes), shift));

    let training = input
        .training
        .iter()
        .filter_map(|t| {
            match (
                parse_field(t.start.as_deref()),
                parse_field(t.end.as_deref()),
            ) {
                (Some(start), Some(end)) => Some(align_to_shift(Interval::new(start, end), shift)),
                _ => {
                    debug!(worker = %name, "training bounds absent; interval ignored");
                    None
                }
            }
        })
        .collect();

    Ok(Worker {
        name,
        shift,
        break_window,
        training,
    })
}

/// Normalizes every worker record, failing on the first invalid one.
///
/// Records with an empty name are unfilled rows and are skipped.
pub fn normalize_workers(inputs: &[WorkerInput], break_minutes: i64) -> EngineResult<Vec<Worker>> {
    inputs
        .iter()
        .enumerate()
        .filter(|(i, input)| {
            if input.name.is_empty() {
                debug!(index = i + 1, "unnamed worker record skipped");
            }
            !input.name.is_empty()
        })
        .map(|(i, input)| normalize_worker(i + 1, input, break_minutes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn input(name: &str, start: &str, end: &str, brk: &str) -> WorkerInput {
        WorkerInput {
            name: name.to_string(),
            shift_start: Some(start.to_string()),
            shift_end: Some(end.to_string()),
            break_start: Some(brk.to_string()),
            training: vec![],
        }
    }

    #[test]
    fn test_display_name_variants() {
        assert_eq!(display_name("Jane Doe"), "Jane D.");
        assert_eq!(display_name("  Jane   Doe "), "Jane D.");
        assert_eq!(display_name("Cher"), "Cher");
        assert_eq!(display_name("Mary Ann Smith"), "Mary A.");
    }

    #[test]
    fn test_day_shift_with_break() {
        let worker = normalize_worker(1, &input("Ana Bell", "9:00 AM", "1:00 PM", "11:00 AM"), 30)
            .unwrap();

        let shift = worker.shift.unwrap();
        assert_eq!(shift.start, make_datetime("1970-01-01", "09:00:00"));
        assert_eq!(shift.end, make_datetime("1970-01-01", "13:00:00"));

        let brk = worker.break_window.unwrap();
        assert_eq!(brk.start, make_datetime("1970-01-01", "11:00:00"));
        assert_eq!(brk.end, make_datetime("1970-01-01", "11:30:00"));
    }

    #[test]
    fn test_configured_break_length_is_used() {
        let worker = normalize_worker(1, &input("Ana Bell", "9:00", "17:00", "12:00"), 60)
            .unwrap();
        assert_eq!(worker.break_window.unwrap().duration_minutes(), 60);
    }

    #[test]
    fn test_overnight_shift_wraps_end() {
        let worker =
            normalize_worker(1, &input("Ana Bell", "10:00 PM", "6:00 AM", ""), 30).unwrap();
        let shift = worker.shift.unwrap();
        assert_eq!(shift.end, make_datetime("1970-01-02", "06:00:00"));
        assert!(worker.break_window.is_none());
    }

    #[test]
    fn test_post_midnight_break_is_aligned_to_overnight_shift() {
        let worker =
            normalize_worker(1, &input("Ana Bell", "10:00 PM", "6:00 AM", "2:00 AM"), 30)
                .unwrap();
        assert_eq!(
            worker.break_window.unwrap().start,
            make_datetime("1970-01-02", "02:00:00")
        );
    }

    #[test]
    fn test_break_outside_shift_is_left_in_place() {
        // 7:00 AM is before a 9-to-1 shift and a day later is past its end.
        let worker =
            normalize_worker(1, &input("Ana Bell", "9:00 AM", "1:00 PM", "7:00 AM"), 30).unwrap();
        assert_eq!(
            worker.break_window.unwrap().start,
            make_datetime("1970-01-01", "07:00:00")
        );
    }

    #[test]
    fn test_unreadable_shift_leaves_shift_absent() {
        let worker =
            normalize_worker(1, &input("Ana Bell", "morning", "1:00 PM", "11:00 AM"), 30).unwrap();
        assert!(worker.shift.is_none());
        assert!(worker.break_window.is_some());
    }

    #[test]
    fn test_training_intervals_parsed_and_partial_ones_dropped() {
        let mut record = input("Ana Bell", "9:00 AM", "5:00 PM", "N/A");
        record.training = vec![
            TrainingInput {
                start: Some("10:00 AM".to_string()),
                end: Some("11:00 AM".to_string()),
            },
            TrainingInput {
                start: Some("2:00 PM".to_string()),
                end: None,
            },
        ];

        let worker = normalize_worker(1, &record, 30).unwrap();
        assert_eq!(worker.training.len(), 1);
        assert_eq!(
            worker.training[0].start,
            make_datetime("1970-01-01", "10:00:00")
        );
        assert!(worker.break_window.is_none());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = normalize_worker(4, &input("   ", "9:00 AM", "1:00 PM", ""), 30);
        match result {
            Err(EngineError::InvalidWorker { index, message }) => {
                assert_eq!(index, 4);
                assert_eq!(message, "name is missing");
            }
            _ => panic!("Expected InvalidWorker error"),
        }
    }

    #[test]
    fn test_normalize_workers_reports_position() {
        let inputs = vec![
            input("Ana Bell", "9:00 AM", "1:00 PM", ""),
            input("", "9:00 AM", "1:00 PM", ""),
            input("  ", "9:00 AM", "1:00 PM", ""),
        ];
        match normalize_workers(&inputs, 30) {
            Err(EngineError::InvalidWorker { index, .. }) => assert_eq!(index, 3),
            other => panic!("Expected InvalidWorker error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_workers_skips_unnamed_rows() {
        let inputs = vec![
            input("", "9:00 AM", "1:00 PM", ""),
            input("Ana Bell", "9:00 AM", "1:00 PM", ""),
            input("", "", "", ""),
        ];
        let workers = normalize_workers(&inputs, 30).unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].name, "Ana B.");
    }

    #[test]
    fn test_worker_input_deserializes_with_missing_optionals() {
        let json = r#"{ "name": "Ana Bell", "shift_start": "9:00 AM", "shift_end": "1:00 PM" }"#;
        let record: WorkerInput = serde_json::from_str(json).unwrap();
        assert_eq!(record.break_start, None);
        assert!(record.training.is_empty());
    }
}
