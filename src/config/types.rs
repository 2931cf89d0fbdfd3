//! Configuration types for the station rota.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::intake::DEFAULT_BREAK_MINUTES;

/// Store opening hours as written in the configuration file.
///
/// Values are free text and go through the same time parser as worker
/// input, so `8:00 AM` and `08:00` are both accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreHoursConfig {
    /// Opening time of day.
    pub open: String,
    /// Closing time of day.
    pub close: String,
}

/// Output settings for the delimited report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Field delimiter; must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// The complete rota configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RotaConfig {
    /// Default store hours, used when a request does not carry its own.
    pub store_hours: StoreHoursConfig,
    /// Length of each worker's break in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_break_minutes() -> i64 {
    DEFAULT_BREAK_MINUTES
}

fn default_delimiter() -> char {
    ','
}
