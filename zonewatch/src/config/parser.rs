//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::{ConfigFile, ZoneDefinition};
use crate::color::Color;

/// Prefix of per-zone section names, e.g. `[zone.Blue]`.
pub(super) const ZONE_SECTION_PREFIX: &str = "zone.";

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [radius] section: every key is a zone name substring
    if let Some(section) = ini.section(Some("radius")) {
        for (key, v) in section.iter() {
            let meters = parse_meters(v).ok_or_else(|| ConfigFileError::InvalidValue {
                section: "radius".to_string(),
                key: key.to_string(),
                value: v.to_string(),
                reason: "must be a non-negative number of meters".to_string(),
            })?;
            config.radius.set(key, meters);
        }
    }

    // [calibration] section
    if let Some(section) = ini.section(Some("calibration")) {
        if let Some(v) = section.get("steps") {
            config.calibration.steps = v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|steps| steps.is_finite())
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "calibration".to_string(),
                    key: "steps".to_string(),
                    value: v.to_string(),
                    reason: "must be a finite number".to_string(),
                })?;
        }
    }

    // [polling] section
    if let Some(section) = ini.section(Some("polling")) {
        if let Some(v) = section.get("interval_secs") {
            let secs: u64 = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "polling".to_string(),
                key: "interval_secs".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer (seconds)".to_string(),
            })?;
            if secs == 0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "polling".to_string(),
                    key: "interval_secs".to_string(),
                    value: v.to_string(),
                    reason: "must be at least 1 second".to_string(),
                });
            }
            config.polling.interval_secs = secs;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    // [zone.<Name>] sections, in file order
    for (name, section) in ini.iter() {
        let Some(zone_name) = name.and_then(|n| n.strip_prefix(ZONE_SECTION_PREFIX)) else {
            continue;
        };
        config.zones.push(parse_zone(zone_name, section)?);
    }

    Ok(config)
}

fn parse_zone(name: &str, section: &ini::Properties) -> Result<ZoneDefinition, ConfigFileError> {
    let section_name = format!("{}{}", ZONE_SECTION_PREFIX, name);

    if name.trim().is_empty() {
        return Err(ConfigFileError::InvalidValue {
            section: section_name,
            key: "name".to_string(),
            value: String::new(),
            reason: "zone name must not be empty".to_string(),
        });
    }

    let required = |key: &str| {
        section
            .get(key)
            .ok_or_else(|| ConfigFileError::MissingValue {
                section: section_name.clone(),
                key: key.to_string(),
            })
    };
    let invalid = |key: &str, value: &str, reason: &str| ConfigFileError::InvalidValue {
        section: section_name.clone(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let color_value = required("color")?;
    let color: Color = color_value
        .trim()
        .trim_matches('"')
        .parse()
        .map_err(|e: crate::color::ColorParseError| invalid("color", color_value, &e.to_string()))?;

    let radius_value = required("radius")?;
    let radius = parse_meters(radius_value).ok_or_else(|| {
        invalid(
            "radius",
            radius_value,
            "must be a non-negative number of meters",
        )
    })?;

    let latitude_value = required("latitude")?;
    let latitude: f64 = latitude_value
        .trim()
        .parse()
        .map_err(|_| invalid("latitude", latitude_value, "must be decimal degrees"))?;

    let longitude_value = required("longitude")?;
    let longitude: f64 = longitude_value
        .trim()
        .parse()
        .map_err(|_| invalid("longitude", longitude_value, "must be decimal degrees"))?;

    Ok(ZoneDefinition {
        name: name.to_string(),
        color,
        radius,
        latitude,
        longitude,
    })
}

/// Parse a radius in meters. Zero is allowed and disables a zone.
pub(super) fn parse_meters(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite() && *m >= 0.0)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
