//! Configuration for zonewatch.
//!
//! The configuration lives in `~/.zonewatch/config.ini`:
//!
//! ```ini
//! [radius]
//! Blue = 30
//! Red = 30
//!
//! [calibration]
//! steps = 0
//!
//! [polling]
//! interval_secs = 20
//!
//! [zone.Depot]
//! color = orange
//! radius = 80
//! latitude = 36.05
//! longitude = -95.95
//! ```
//!
//! A missing file means defaults: the reference zone layout, no radius
//! overrides, no calibration offset and a 20 second poll interval.

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_CALIBRATION_STEPS, DEFAULT_LOG_FILE_NAME, DEFAULT_POLL_INTERVAL_SECS};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    CalibrationSettings, ConfigFile, LoggingSettings, PollingSettings, RadiusSettings,
    ZoneDefinition,
};
