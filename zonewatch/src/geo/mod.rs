//! Great-circle geometry.
//!
//! Distances are computed with the haversine formula on a sphere whose
//! radius is [`EARTH_RADIUS_METERS`]. At geofence scale (tens to hundreds
//! of meters) the spherical error is far below GPS noise.

mod types;

pub use types::Coordinate;

use std::f64::consts::PI;

/// Mean Earth radius used for all distance calculations, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_370_999.0;

/// Converts an angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Great-circle distance between two coordinates, in meters.
///
/// Symmetric, zero for identical inputs, and total over finite inputs
/// (out-of-range latitudes or longitudes are not rejected).
///
/// # Example
///
/// ```
/// use zonewatch::geo::{distance_meters, Coordinate};
///
/// let a = Coordinate::new(36.0730846, -95.9233244);
/// let b = Coordinate::new(36.0732846, -95.9233244);
/// let d = distance_meters(a, b);
/// assert!((d - 22.24).abs() < 0.05);
/// ```
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    let delta_lat = degrees_to_radians(b.latitude - a.latitude);
    let delta_lon = degrees_to_radians(b.longitude - a.longitude);

    let half_lat = (delta_lat / 2.0).sin();
    let half_lon = (delta_lon / 2.0).sin();

    let h = half_lat * half_lat
        + degrees_to_radians(a.latitude).cos()
            * degrees_to_radians(b.latitude).cos()
            * half_lon
            * half_lon;

    // Rounding can push h a hair past 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);

    EARTH_RADIUS_METERS * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests;
