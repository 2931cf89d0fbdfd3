//! Request types for the station rota API.
//!
//! This module defines the JSON request structures for the `/schedule` endpoint.

use serde::{Deserialize, Serialize};

use crate::intake::WorkerInput;

/// Request body for the `/schedule` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Store hours for this run; the configured defaults apply when absent.
    #[serde(default)]
    pub store_hours: Option<StoreHoursRequest>,
    /// The workers on the rota.
    pub workers: Vec<WorkerInput>,
}

/// Store hours in a schedule request, as free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHoursRequest {
    /// Opening time, e.g. "8:00 AM".
    pub open: String,
    /// Closing time, e.g. "11:00 PM".
    pub close: String,
}
