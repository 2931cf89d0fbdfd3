//! HTTP API module for the station rota.
//!
//! This module provides the REST endpoints that turn a list of worker
//! records into a station-by-time schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ScheduleRequest, StoreHoursRequest};
pub use response::{ApiError, ApiErrorResponse, ScheduleResponse};
pub use state::AppState;
