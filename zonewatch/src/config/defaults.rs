//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::settings::*;

/// Default seconds between polling cycles.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 20;

/// Default calibration slider position (no offset).
pub const DEFAULT_CALIBRATION_STEPS: f64 = 0.0;

/// Default log file name inside the config directory's `logs/` folder.
pub const DEFAULT_LOG_FILE_NAME: &str = "zonewatch.log";

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            radius: RadiusSettings::default(),
            calibration: CalibrationSettings {
                steps: DEFAULT_CALIBRATION_STEPS,
            },
            polling: PollingSettings {
                interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            },
            logging: LoggingSettings {
                file: config_dir.join("logs").join(DEFAULT_LOG_FILE_NAME),
            },
            zones: Vec::new(),
        }
    }
}
