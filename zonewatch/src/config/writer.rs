//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::fmt::Write;
use std::path::Path;

use super::parser::ZONE_SECTION_PREFIX;
use super::settings::ConfigFile;
use crate::color::Color;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mut radius_lines = String::new();
    for (key, meters) in &config.radius.overrides {
        let _ = writeln!(radius_lines, "{} = {}", key, meters);
    }

    let mut out = format!(
        r#"[radius]
; Radius overrides in meters, applied before every evaluation.
; Each key matches every zone whose name CONTAINS it, so "Blue" also
; resizes "DarkBlue". Later entries win when keys overlap.
; A radius of 0 disables the matching zones.
; Example: Blue = 30
{}
[calibration]
; Shifts every zone west by 0.00005 degrees of longitude per step
; (about 4.5 m at mid-latitudes). Negative steps shift east. Default: 0
steps = {}

[polling]
; Seconds between location checks (default: 20)
interval_secs = {}

[logging]
; Log file location (cleared at the start of each session)
file = {}
"#,
        radius_lines,
        config.calibration.steps,
        config.polling.interval_secs,
        path_to_string(&config.logging.file),
    );

    if !config.zones.is_empty() {
        out.push_str(
            "\n; Custom zone layout. When any [zone.<Name>] section exists the\n\
             ; built-in zones are replaced. Order decides ties between zones.\n",
        );
    }

    for zone in &config.zones {
        let _ = write!(
            out,
            "\n[{}{}]\ncolor = {}\nradius = {}\nlatitude = {}\nlongitude = {}\n",
            ZONE_SECTION_PREFIX,
            zone.name,
            color_value(zone.color),
            zone.radius,
            zone.latitude,
            zone.longitude
        );
    }

    out
}

/// Palette name when there is one, otherwise quoted `#AARRGGBB` so the
/// `#` is never read as a comment.
fn color_value(color: Color) -> String {
    match color.name() {
        Some(name) => name.to_string(),
        None => format!("\"{}\"", color),
    }
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
