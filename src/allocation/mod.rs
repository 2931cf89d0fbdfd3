//! Slot-by-slot station allocation.
//!
//! This module contains the slot expander, the store-hours gate, the
//! per-worker runtime state, rotation pairs, the candidate-selection
//! strategies and the [`AllocationEngine`] that ties them together.
//!
//! # Example
//!
//! ```
//! use station_rota::allocation::{StoreHours, generate_schedule};
//! use station_rota::intake::{normalize_workers, WorkerInput};
//! use station_rota::models::Station;
//!
//! let workers = normalize_workers(&[WorkerInput {
//!     name: "Jane Doe".to_string(),
//!     shift_start: Some("9:00 AM".to_string()),
//!     shift_end: Some("10:00 AM".to_string()),
//!     break_start: None,
//!     training: vec![],
//! }], 30).unwrap();
//!
//! let hours = StoreHours::parse("8:00 AM", "4:00 PM").unwrap();
//! let outcome = generate_schedule(&workers, &hours);
//! let matrix = outcome.matrix().unwrap();
//! assert_eq!(matrix.cell(Station::Handout, "9:00 AM"), Some("Jane D."));
//! ```

mod engine;
mod expander;
mod pairing;
mod runtime;
mod store_hours;
mod strategy;

pub use engine::{AllocationEngine, SlotAssignment, generate_schedule};
pub use expander::{SLOT_MINUTES, build_slots, expand_worker, expand_workers};
pub use pairing::StationPair;
pub use runtime::{RuntimeBook, WorkerRuntime};
pub use store_hours::StoreHours;
pub use strategy::{SelectionContext, Strategy, strategies_for};
