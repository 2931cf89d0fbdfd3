//! Store opening hours.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::intake::parse_time_of_day;

/// The store's open interval as times of day.
///
/// When `open` is later than `close` the store trades across midnight and
/// is open on `[open, 24:00)` and `[00:00, close)`. Equal bounds mean the
/// store never opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    /// Opening time (inclusive).
    pub open: NaiveTime,
    /// Closing time (exclusive).
    pub close: NaiveTime,
}

impl StoreHours {
    /// Creates store hours from parsed times.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Parses store hours from free text.
    ///
    /// Unlike worker times, both bounds are required.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_rota::allocation::StoreHours;
    /// use station_rota::error::EngineError;
    ///
    /// assert!(StoreHours::parse("8:00 AM", "11:00 PM").is_ok());
    ///
    /// match StoreHours::parse("8:00 AM", "late") {
    ///     Err(EngineError::InvalidStoreHours { field, .. }) => assert_eq!(field, "close"),
    ///     _ => panic!("expected InvalidStoreHours"),
    /// }
    /// ```
    pub fn parse(open: &str, close: &str) -> EngineResult<Self> {
        let open_time = parse_time_of_day(open).ok_or_else(|| EngineError::InvalidStoreHours {
            field: "open".to_string(),
            value: open.to_string(),
        })?;
        let close_time =
            parse_time_of_day(close).ok_or_else(|| EngineError::InvalidStoreHours {
                field: "close".to_string(),
                value: close.to_string(),
            })?;
        Ok(Self::new(open_time, close_time))
    }

    /// Returns true if the store is open at `time`.
    pub fn is_open(&self, time: NaiveTime) -> bool {
        if self.open <= self.close {
            self.open <= time && time < self.close
        } else {
            time >= self.open || time < self.close
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_daytime_hours_are_half_open() {
        let hours = StoreHours::new(time(8, 0), time(16, 0));
        assert!(!hours.is_open(time(7, 30)));
        assert!(hours.is_open(time(8, 0)));
        assert!(hours.is_open(time(15, 30)));
        assert!(!hours.is_open(time(16, 0)));
    }

    #[test]
    fn test_overnight_hours_wrap_midnight() {
        let hours = StoreHours::new(time(20, 0), time(2, 0));
        assert!(hours.is_open(time(20, 0)));
        assert!(hours.is_open(time(23, 30)));
        assert!(hours.is_open(time(0, 0)));
        assert!(hours.is_open(time(1, 30)));
        assert!(!hours.is_open(time(2, 0)));
        assert!(!hours.is_open(time(12, 0)));
    }

    #[test]
    fn test_equal_bounds_never_open() {
        let hours = StoreHours::new(time(9, 0), time(9, 0));
        assert!(!hours.is_open(time(9, 0)));
        assert!(!hours.is_open(time(21, 0)));
    }

    #[test]
    fn test_parse_rejects_blank_open() {
        match StoreHours::parse("", "5:00 PM") {
            Err(EngineError::InvalidStoreHours { field, value }) => {
                assert_eq!(field, "open");
                assert_eq!(value, "");
            }
            _ => panic!("Expected InvalidStoreHours error"),
        }
    }

    #[test]
    fn test_parse_accepts_mixed_formats() {
        let hours = StoreHours::parse("06:00", "9:30 PM").unwrap();
        assert_eq!(hours.open, time(6, 0));
        assert_eq!(hours.close, time(21, 30));
    }
}
