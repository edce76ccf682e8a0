//! Evaluation result type.

use std::fmt;

use crate::color::Color;
use crate::zone::Zone;

/// Name reported when a location is outside every zone.
pub const NO_ZONE_NAME: &str = "White";

/// Color reported when a location is outside every zone.
pub const NO_ZONE_COLOR: Color = Color::WHITE;

/// Color an application shows while it is not monitoring at all.
pub const NOT_POLLING_COLOR: Color = Color::GRAY;

/// Snapshot of which zone a location falls in.
///
/// Outside every zone the event carries the sentinel values: name
/// [`NO_ZONE_NAME`], color [`NO_ZONE_COLOR`], infinite distance and a
/// relative distance of exactly `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneEvent {
    zone_name: String,
    zone_color: Color,
    distance_from_zone_meters: f64,
    relative_distance_from_zone: f64,
}

impl ZoneEvent {
    /// The "not in any zone" event.
    pub fn none() -> Self {
        Self {
            zone_name: NO_ZONE_NAME.to_string(),
            zone_color: NO_ZONE_COLOR,
            distance_from_zone_meters: f64::INFINITY,
            relative_distance_from_zone: 1.0,
        }
    }

    pub(crate) fn inside(zone: &Zone, color: Color, distance: f64, relative: f64) -> Self {
        Self {
            zone_name: zone.name().to_string(),
            zone_color: color,
            distance_from_zone_meters: distance,
            relative_distance_from_zone: relative,
        }
    }

    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// Display color, already shaded for proximity to the zone edge.
    pub fn zone_color(&self) -> Color {
        self.zone_color
    }

    /// Distance to the zone's effective center in meters.
    pub fn distance_from_zone_meters(&self) -> f64 {
        self.distance_from_zone_meters
    }

    /// Distance as a fraction of the zone radius, in `[0, 1)` inside a zone.
    pub fn relative_distance_from_zone(&self) -> f64 {
        self.relative_distance_from_zone
    }

    pub fn is_in_zone(&self) -> bool {
        self.relative_distance_from_zone < 1.0
    }

    /// One-line summary such as `Blue: 22 m (74%)`.
    pub fn describe(&self) -> String {
        if !self.is_in_zone() {
            return "not in any zone".to_string();
        }
        format!(
            "{}: {:.0} m ({:.0}%)",
            self.zone_name,
            self.distance_from_zone_meters,
            self.relative_distance_from_zone * 100.0
        )
    }
}

impl Default for ZoneEvent {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for ZoneEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
