//! Time-of-day parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// Accepted layouts, tried in order. 12-hour forms come first so that a
/// trailing meridiem is never left unconsumed by a 24-hour layout.
const TIME_FORMATS: &[&str] = &[
    "%I:%M %p",
    "%I:%M%p",
    "%I:%M:%S %p",
    "%I:%M:%S%p",
    "%H:%M",
    "%H:%M:%S",
];

/// The fixed date every parsed time is anchored to (1970-01-01).
pub fn reference_date() -> NaiveDate {
    NaiveDate::default()
}

/// Anchors a time of day to the reference date.
pub fn on_reference_date(time: NaiveTime) -> NaiveDateTime {
    reference_date().and_time(time)
}

/// Rewrites an hour-only 12-hour time (`9 AM`, `12pm`) as `H:00 AM`.
fn with_minutes(upper: &str) -> Option<String> {
    let meridiem = if upper.ends_with("AM") {
        "AM"
    } else if upper.ends_with("PM") {
        "PM"
    } else {
        return None;
    };
    let hour = upper[..upper.len() - 2].trim_end();
    let digits = (1..=2).contains(&hour.len()) && hour.bytes().all(|b| b.is_ascii_digit());
    digits.then(|| format!("{}:00 {}", hour, meridiem))
}

/// Parses a free-text time of day.
///
/// Accepts 12-hour times with a meridiem (`9:00 AM`, `09:30pm`, `9 AM`) and
/// 24-hour times (`14:30`, `08:00:00`). Blank input, `N/A` and anything
/// unreadable return `None`.
///
/// # Examples
///
/// ```
/// use station_rota::intake::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("9:30 PM"), NaiveTime::from_hms_opt(21, 30, 0));
/// assert_eq!(parse_time_of_day("14:00"), NaiveTime::from_hms_opt(14, 0, 0));
/// assert_eq!(parse_time_of_day("N/A"), None);
/// assert_eq!(parse_time_of_day("lunchtime"), None);
/// ```
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let value = raw.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("n/a") {
        return None;
    }

    let mut upper = value.to_ascii_uppercase();
    if let Some(expanded) = with_minutes(&upper) {
        upper = expanded;
    }
    let parsed = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&upper, format).ok());

    if parsed.is_none() {
        debug!(value = %value, "unreadable time of day treated as absent");
    }
    parsed
}
