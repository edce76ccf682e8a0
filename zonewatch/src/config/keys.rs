//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via small value
//! specifications.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::parser::{expand_tilde, parse_meters};
use super::settings::ConfigFile;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation. Radius overrides are
/// addressed as `radius.<Key>`, where the key keeps its case because it is
/// matched against zone names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigKey {
    CalibrationSteps,
    PollingIntervalSecs,
    LoggingFile,
    Radius(String),
}

static FIXED_KEYS: [ConfigKey; 3] = [
    ConfigKey::CalibrationSteps,
    ConfigKey::PollingIntervalSecs,
    ConfigKey::LoggingFile,
];

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(zone_key) = s.strip_prefix("radius.") {
            if zone_key.is_empty() {
                return Err(ConfigKeyError::UnknownKey(s.to_string()));
            }
            return Ok(ConfigKey::Radius(zone_key.to_string()));
        }

        match s.to_lowercase().as_str() {
            "calibration.steps" => Ok(ConfigKey::CalibrationSteps),
            "polling.interval_secs" => Ok(ConfigKey::PollingIntervalSecs),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "polling.interval_secs").
    pub fn name(&self) -> String {
        match self {
            ConfigKey::CalibrationSteps => "calibration.steps".to_string(),
            ConfigKey::PollingIntervalSecs => "polling.interval_secs".to_string(),
            ConfigKey::LoggingFile => "logging.file".to_string(),
            ConfigKey::Radius(key) => format!("radius.{}", key),
        }
    }

    /// Get the section name (e.g., "polling").
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::CalibrationSteps => "calibration",
            ConfigKey::PollingIntervalSecs => "polling",
            ConfigKey::LoggingFile => "logging",
            ConfigKey::Radius(_) => "radius",
        }
    }

    /// Get the value from a config file as a string.
    ///
    /// Unset radius overrides read as an empty string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::CalibrationSteps => config.calibration.steps.to_string(),
            ConfigKey::PollingIntervalSecs => config.polling.interval_secs.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
            ConfigKey::Radius(key) => config
                .radius
                .get(key)
                .map(|m| m.to_string())
                .unwrap_or_default(),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before
    /// setting. An empty value clears a radius override.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        if let ConfigKey::Radius(key) = self {
            if value.trim().is_empty() {
                config.radius.remove(key);
                return Ok(());
            }
        }

        self.validate(value)?;

        let invalid = |reason: &str| ConfigKeyError::ValidationFailed {
            key: self.name(),
            reason: reason.to_string(),
        };

        match self {
            ConfigKey::CalibrationSteps => {
                config.calibration.steps = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("must be a number"))?;
            }
            ConfigKey::PollingIntervalSecs => {
                config.polling.interval_secs = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("must be a positive integer"))?;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = expand_tilde(value.trim());
            }
            ConfigKey::Radius(key) => {
                let meters =
                    parse_meters(value).ok_or_else(|| invalid("must be a non-negative number"))?;
                config.radius.set(key, meters);
            }
        }

        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name(),
                reason,
            })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::CalibrationSteps => Box::new(NumberSpec),
            ConfigKey::PollingIntervalSecs => Box::new(PositiveIntegerSpec),
            ConfigKey::LoggingFile => Box::new(PathSpec),
            ConfigKey::Radius(_) => Box::new(MetersSpec),
        }
    }

    /// All fixed keys. Radius overrides are listed from the config itself.
    pub fn fixed() -> &'static [ConfigKey] {
        &FIXED_KEYS
    }

    /// Every key that currently has a value in `config`.
    pub fn all_for(config: &ConfigFile) -> Vec<ConfigKey> {
        config
            .radius
            .overrides
            .iter()
            .map(|(key, _)| ConfigKey::Radius(key.clone()))
            .chain(Self::fixed().iter().cloned())
            .collect()
    }
}

// ============================================================================
// Value Specifications
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Check if the value satisfies this specification.
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification for any finite number.
struct NumberSpec;

impl ValueSpecification for NumberSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => Err("must be a number".to_string()),
        }
    }
}

/// Specification for integers of at least one.
struct PositiveIntegerSpec;

impl ValueSpecification for PositiveIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.trim().parse::<u64>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err("must be a positive integer".to_string()),
        }
    }
}

/// Specification for a radius in meters.
struct MetersSpec;

impl ValueSpecification for MetersSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_meters(value)
            .map(|_| ())
            .ok_or_else(|| "must be a non-negative number of meters".to_string())
    }
}

/// Specification for path values (non-empty).
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_keys() {
        assert_eq!(
            "calibration.steps".parse::<ConfigKey>().unwrap(),
            ConfigKey::CalibrationSteps
        );
        assert_eq!(
            "POLLING.interval_secs".parse::<ConfigKey>().unwrap(),
            ConfigKey::PollingIntervalSecs
        );
        assert!("polling.cadence".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_radius_key_keeps_case() {
        let key: ConfigKey = "radius.DarkBlue".parse().unwrap();
        assert_eq!(key, ConfigKey::Radius("DarkBlue".to_string()));
        assert_eq!(key.name(), "radius.DarkBlue");
        assert_eq!(key.section(), "radius");
        assert!("radius.".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_set_and_get_radius() {
        let mut config = ConfigFile::default();
        let key = ConfigKey::Radius("Blue".to_string());

        assert_eq!(key.get(&config), "");
        key.set(&mut config, "45").unwrap();
        assert_eq!(key.get(&config), "45");
        assert_eq!(config.radius.get("Blue"), Some(45.0));

        key.set(&mut config, "").unwrap();
        assert_eq!(config.radius.get("Blue"), None);
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = ConfigFile::default();

        assert!(ConfigKey::PollingIntervalSecs.set(&mut config, "0").is_err());
        assert!(ConfigKey::PollingIntervalSecs.set(&mut config, "-5").is_err());
        assert!(ConfigKey::CalibrationSteps.set(&mut config, "left").is_err());
        assert!(ConfigKey::Radius("Red".to_string())
            .set(&mut config, "-1")
            .is_err());
        assert!(ConfigKey::LoggingFile.set(&mut config, "  ").is_err());

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_set_fixed_keys() {
        let mut config = ConfigFile::default();

        ConfigKey::PollingIntervalSecs.set(&mut config, "15").unwrap();
        ConfigKey::CalibrationSteps.set(&mut config, "-2.5").unwrap();
        ConfigKey::LoggingFile
            .set(&mut config, "/tmp/zonewatch.log")
            .unwrap();

        assert_eq!(config.polling.interval_secs, 15);
        assert_eq!(config.calibration.steps, -2.5);
        assert_eq!(
            ConfigKey::LoggingFile.get(&config),
            "/tmp/zonewatch.log".to_string()
        );
    }

    #[test]
    fn test_all_for_lists_radius_overrides_first() {
        let mut config = ConfigFile::default();
        config.radius.set("Green", 10.0);

        let keys = ConfigKey::all_for(&config);
        assert_eq!(keys[0], ConfigKey::Radius("Green".to_string()));
        assert_eq!(keys.len(), 1 + ConfigKey::fixed().len());
    }
}
