//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rota
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::allocation::StoreHours;
use crate::error::{EngineError, EngineResult};

use super::types::RotaConfig;

/// Longest accepted break, one day.
pub const MAX_BREAK_MINUTES: i64 = 24 * 60;

/// Loads, validates and provides access to the rota configuration.
///
/// # Example
///
/// ```no_run
/// use station_rota::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rota.yaml")?;
/// println!("Store opens at {}", loader.store_hours().open);
/// # Ok::<(), station_rota::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RotaConfig,
    store_hours: StoreHours,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or fails validation (`ConfigParseError`)
    /// - The store hours cannot be parsed (`InvalidStoreHours`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use station_rota::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str(r#"
    /// store_hours:
    ///   open: "8:00 AM"
    ///   close: "11:00 PM"
    /// "#)?;
    /// assert_eq!(loader.break_minutes(), 30);
    /// assert_eq!(loader.delimiter(), b',');
    /// # Ok::<(), station_rota::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: RotaConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if !(1..=MAX_BREAK_MINUTES).contains(&config.break_minutes) {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "break_minutes must be between 1 and {}, got {}",
                    MAX_BREAK_MINUTES, config.break_minutes
                ),
            });
        }
        if !config.report.delimiter.is_ascii() {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "report.delimiter must be a single ASCII character, got '{}'",
                    config.report.delimiter
                ),
            });
        }

        let store_hours = StoreHours::parse(&config.store_hours.open, &config.store_hours.close)?;

        Ok(Self {
            config,
            store_hours,
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RotaConfig {
        &self.config
    }

    /// Returns the parsed default store hours.
    pub fn store_hours(&self) -> StoreHours {
        self.store_hours
    }

    /// Returns the configured break length in minutes.
    pub fn break_minutes(&self) -> i64 {
        self.config.break_minutes
    }

    /// Returns the report delimiter as a byte.
    pub fn delimiter(&self) -> u8 {
        // Checked to be ASCII at load time.
        self.config.report.delimiter as u8
    }
}
