//! Core data models for the station rota engine.
//!
//! This module contains all the domain models used throughout the engine.

mod occupancy;
mod schedule;
mod station;
mod worker;

pub use occupancy::{OccupancyRecord, SlotActivity, TimeSlot};
pub use schedule::{
    AllocationTrace, AssignmentRecord, AssignmentRule, MatrixRow, NO_DATA_SENTINEL,
    ScheduleMatrix, ScheduleOutcome,
};
pub use station::Station;
pub use worker::{Interval, Worker};
