//! Error types for the station rota engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine surfaces to its caller. Unparseable time
//! values are not errors: they degrade to "absent" inside the intake layer.

use thiserror::Error;

/// The main error type for the station rota engine.
///
/// # Example
///
/// ```
/// use station_rota::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rota.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rota.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A store open or close time could not be read as a time of day.
    #[error("Invalid store hours '{field}': '{value}' is not a time of day")]
    InvalidStoreHours {
        /// Which bound was invalid ("open" or "close").
        field: String,
        /// The raw value supplied.
        value: String,
    },

    /// A worker record was rejected before scheduling.
    #[error("Invalid worker #{index}: {message}")]
    InvalidWorker {
        /// Position of the worker in the submitted list (1-based).
        index: usize,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The report could not be serialized.
    #[error("Report error: {message}")]
    ReportError {
        /// A description of the serialization failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::ReportError {
            message: err.to_string(),
        }
    }
}
