//! Edge-of-zone shading.
//!
//! A zone shows its base color deep inside, then two progressively
//! lighter shades as the position approaches the boundary.

use super::Color;

/// Relative distance past which the lightest shade is used.
pub const OUTER_PERIMETER_THRESHOLD: f64 = 0.90;

/// Relative distance past which the intermediate shade is used.
pub const MIDDLE_PERIMETER_THRESHOLD: f64 = 0.75;

/// Derives the displayed color for a position inside a zone.
///
/// `relative_distance` is the fraction of the zone radius between the
/// center and the position. The threshold value itself doubles as the
/// blend factor toward white.
///
/// # Example
///
/// ```
/// use zonewatch::color::{display_color, Color};
///
/// assert_eq!(display_color(Color::BLUE, 0.5), Color::BLUE);
/// assert_eq!(display_color(Color::BLUE, 0.8), Color::BLUE.lighten(0.75));
/// assert_eq!(display_color(Color::BLUE, 0.95), Color::BLUE.lighten(0.90));
/// ```
pub fn display_color(base: Color, relative_distance: f64) -> Color {
    if relative_distance > OUTER_PERIMETER_THRESHOLD {
        base.lighten(OUTER_PERIMETER_THRESHOLD)
    } else if relative_distance > MIDDLE_PERIMETER_THRESHOLD {
        base.lighten(MIDDLE_PERIMETER_THRESHOLD)
    } else {
        base
    }
}
