//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::color::Color;
use crate::geo::Coordinate;
use crate::zone::Zone;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Radius overrides keyed by zone name substring, in file order
    pub radius: RadiusSettings,
    /// Longitudinal calibration
    pub calibration: CalibrationSettings,
    /// Polling cadence
    pub polling: PollingSettings,
    /// Logging settings
    pub logging: LoggingSettings,
    /// Custom zone layout; empty means the built-in reference layout
    pub zones: Vec<ZoneDefinition>,
}

/// Radius overrides from the `[radius]` section.
///
/// Each entry is applied to every zone whose name contains the key, in
/// the order the entries appear in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusSettings {
    pub overrides: Vec<(String, f64)>,
}

impl RadiusSettings {
    /// Sets or replaces the override for `key`, keeping its position.
    pub fn set(&mut self, key: &str, meters: f64) {
        match self.overrides.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = meters,
            None => self.overrides.push((key.to_string(), meters)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.overrides
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, meters)| *meters)
    }

    /// Removes the override for `key`, returning whether it existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.overrides.len();
        self.overrides.retain(|(k, _)| k != key);
        self.overrides.len() != before
    }
}

/// Calibration configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationSettings {
    /// Calibration slider position; each step shifts zones 0.00005° west
    pub steps: f64,
}

/// Polling configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PollingSettings {
    /// Seconds between polling cycles
    pub interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

/// One zone from a `[zone.<Name>]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDefinition {
    pub name: String,
    pub color: Color,
    pub radius: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl ZoneDefinition {
    pub fn to_zone(&self) -> Zone {
        Zone::new(
            self.name.clone(),
            self.color,
            self.radius,
            Coordinate::new(self.latitude, self.longitude),
        )
    }
}
