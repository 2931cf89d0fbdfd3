//! Configuration loading for the station rota.
//!
//! This module loads the default store hours, break length and report
//! delimiter from a single YAML file.
//!
//! # Example
//!
//! ```no_run
//! use station_rota::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rota.yaml").unwrap();
//! println!("Breaks last {} minutes", config.break_minutes());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, MAX_BREAK_MINUTES};
pub use types::{ReportConfig, RotaConfig, StoreHoursConfig};
