//! Coordinate type definitions

use std::fmt;

/// A geographic position in decimal degrees.
///
/// No range validation or wraparound is applied. Callers are expected to
/// supply WGS84-like values; anything finite still produces a numeric
/// distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Degrees north (negative for south)
    pub latitude: f64,
    /// Degrees east (negative for west)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns this coordinate shifted east by `offset` degrees of longitude.
    ///
    /// Latitude is carried over unchanged.
    #[inline]
    pub fn with_longitude_offset(&self, offset: f64) -> Self {
        Self {
            latitude: self.latitude,
            longitude: self.longitude + offset,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}, {:.7}", self.latitude, self.longitude)
    }
}
