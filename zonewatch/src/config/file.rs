//! Configuration file handling for ~/.zonewatch/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::settings::{ConfigFile, ZoneDefinition};

use crate::monitor::{offset_from_calibration_steps, MonitorConfig};
use crate::zone::{ZoneAdjustments, ZoneRegistry};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Required key absent from a section
    #[error("Missing configuration: {section}.{key} is required")]
    MissingValue { section: String, key: String },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.zonewatch/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.zonewatch/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    /// Builds the zone registry described by this configuration.
    ///
    /// Uses the `[zone.*]` sections when there are any, otherwise the
    /// built-in reference layout.
    pub fn build_registry(&self) -> ZoneRegistry {
        if self.zones.is_empty() {
            ZoneRegistry::reference()
        } else {
            ZoneRegistry::from_zones(self.zones.iter().map(ZoneDefinition::to_zone))
        }
    }

    /// Per-cycle zone adjustments from the radius and calibration settings.
    pub fn adjustments(&self) -> ZoneAdjustments {
        let mut adjustments = ZoneAdjustments::new();
        for (key, meters) in &self.radius.overrides {
            adjustments.set_radius(key.clone(), *meters);
        }
        adjustments.set_longitudinal_offset(offset_from_calibration_steps(self.calibration.steps));
        adjustments
    }

    /// Monitor configuration from the polling, radius and calibration settings.
    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            poll_interval: Duration::from_secs(self.polling.interval_secs),
            adjustments: self.adjustments(),
        }
    }
}

/// Get the path to the config directory (~/.zonewatch).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".zonewatch")
}

/// Get the path to the config file (~/.zonewatch/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::defaults::DEFAULT_POLL_INTERVAL_SECS;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.radius.overrides.is_empty());
        assert_eq!(config.calibration.steps, 0.0);
        assert_eq!(config.polling.interval_secs, DEFAULT_POLL_INTERVAL_SECS);
        assert!(config.logging.file.ends_with("logs/zonewatch.log"));
        assert!(config.zones.is_empty());
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.radius.set("Blue", 42.0);
        config.radius.set("Green", 0.0);
        config.calibration.steps = 3.0;
        config.polling.interval_secs = 10;
        config.zones.push(ZoneDefinition {
            name: "Depot".to_string(),
            color: Color::from_argb(0x80, 1, 2, 3),
            radius: 75.0,
            latitude: 36.05,
            longitude: -95.95,
        });
        config.save_to(&config_path).unwrap();

        let reloaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(reloaded.radius, config.radius);
        assert_eq!(reloaded.calibration, config.calibration);
        assert_eq!(reloaded.polling, config.polling);
        assert_eq!(reloaded.zones, config.zones);
    }

    #[test]
    fn test_build_registry_defaults_to_reference() {
        let registry = ConfigFile::default().build_registry();
        assert_eq!(registry, ZoneRegistry::reference());
    }

    #[test]
    fn test_build_registry_from_definitions() {
        let mut config = ConfigFile::default();
        config.zones.push(ZoneDefinition {
            name: "Depot".to_string(),
            color: Color::ORANGE,
            radius: 75.0,
            latitude: 36.05,
            longitude: -95.95,
        });

        let registry = config.build_registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.zones()[0].name(), "Depot");
        assert_eq!(registry.zones()[0].radius(), 75.0);
    }

    #[test]
    fn test_adjustments_from_settings() {
        let mut config = ConfigFile::default();
        config.radius.set("Red", 25.0);
        config.calibration.steps = 2.0;

        let adjustments = config.adjustments();
        assert_eq!(adjustments.radii(), &[("Red".to_string(), 25.0)]);
        assert!((adjustments.longitudinal_offset() - -0.0001).abs() < 1e-15);

        let monitor = config.monitor_config();
        assert_eq!(monitor.poll_interval, Duration::from_secs(20));
        assert_eq!(monitor.adjustments, adjustments);
    }
}
