//! Input normalization for the station rota engine.
//!
//! This module turns the loosely-typed worker records gathered by a front
//! end into [`Worker`](crate::models::Worker) values with absolute
//! intervals. Unreadable or blank time values degrade to "absent"; only a
//! missing worker name is rejected.

mod time_parse;
mod worker_input;

pub use time_parse::{parse_time_of_day, reference_date, on_reference_date};
pub use worker_input::{
    DEFAULT_BREAK_MINUTES, TrainingInput, WorkerInput, display_name, normalize_worker,
    normalize_workers,
};
