//! Built-in zone layout.
//!
//! Five 30 m zones clustered within a couple of hundred meters of each
//! other, plus four 120 m zones a few kilometers out. Blue, Red and Green
//! overlap deliberately; DarkBlue and DarkRed sit just beyond them.

use super::{Zone, ZoneRegistry};
use crate::color::Color;
use crate::geo::Coordinate;

/// Group key for the blue zone family ("Blue", "DarkBlue").
pub const ZONE_NAME_BLUE: &str = "Blue";

/// Group key for the red zone family ("Red", "DarkRed").
pub const ZONE_NAME_RED: &str = "Red";

/// Group key for the green zone family ("Green", "DarkGreen").
pub const ZONE_NAME_GREEN: &str = "Green";

/// Radius of the small reference zones, in meters.
pub const DEFAULT_ZONE_RADIUS_METERS: f64 = 30.0;

/// Radius of the outlying reference zones, in meters.
pub const WIDE_ZONE_RADIUS_METERS: f64 = 120.0;

/// (name, color, radius, latitude, longitude)
const REFERENCE_ZONES: [(&str, Color, f64, f64, f64); 9] = [
    (ZONE_NAME_BLUE, Color::BLUE, DEFAULT_ZONE_RADIUS_METERS, 36.0730846, -95.9233244),
    (ZONE_NAME_RED, Color::RED, DEFAULT_ZONE_RADIUS_METERS, 36.07300167, -95.92327945),
    (ZONE_NAME_GREEN, Color::GREEN, DEFAULT_ZONE_RADIUS_METERS, 36.0732572, -95.9230817),
    ("DarkBlue", Color::DARK_BLUE, DEFAULT_ZONE_RADIUS_METERS, 36.07411200, -95.92466600),
    ("DarkRed", Color::DARK_RED, DEFAULT_ZONE_RADIUS_METERS, 36.07403849, -95.92551845),
    ("DarkGreen", Color::DARK_GREEN, WIDE_ZONE_RADIUS_METERS, 36.032276, -95.889212),
    ("Purple", Color::PURPLE, WIDE_ZONE_RADIUS_METERS, 35.983520, -96.084035),
    ("Orange", Color::ORANGE, WIDE_ZONE_RADIUS_METERS, 36.032826, -95.802200),
    ("Yellow", Color::YELLOW, WIDE_ZONE_RADIUS_METERS, 36.030441, -95.901468),
];

impl ZoneRegistry {
    /// Builds the nine-zone reference layout.
    pub fn reference() -> Self {
        Self::from_zones(
            REFERENCE_ZONES
                .iter()
                .map(|&(name, color, radius, latitude, longitude)| {
                    Zone::new(name, color, radius, Coordinate::new(latitude, longitude))
                }),
        )
    }
}
