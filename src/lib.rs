//! Station rotation scheduler for quick-service stores
//!
//! This crate turns a day's worker records (shift, break and training
//! times) into a half-hour station-by-time schedule, rotating workers
//! through paired stations and two-slot Conductor stints.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod report;
