//! The circular zone type.

use crate::color::Color;
use crate::geo::Coordinate;

/// A named circular geofence.
///
/// The zone keeps two centers: the true anchor given at construction, and
/// an offset center that all distance calculations use. The offset center
/// is only ever derived from the anchor plus a shared longitudinal offset,
/// so the anchor is never lost.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    name: String,
    color: Color,
    radius: f64,
    center: Coordinate,
    offset_center: Coordinate,
}

impl Zone {
    /// Creates a zone whose offset center starts at its true center.
    ///
    /// A radius of zero or less is accepted; such a zone never contains
    /// any point.
    pub fn new(name: impl Into<String>, color: Color, radius: f64, center: Coordinate) -> Self {
        Self {
            name: name.into(),
            color,
            radius,
            center,
            offset_center: center,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base (unshaded) color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Radius in meters.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True anchor of the zone.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Center used for distance calculations.
    pub fn offset_center(&self) -> Coordinate {
        self.offset_center
    }

    /// Whether the zone can contain any point at all.
    pub fn is_active(&self) -> bool {
        self.radius > 0.0
    }

    pub(crate) fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Recomputes the offset center from the true center.
    pub(crate) fn apply_longitudinal_offset(&mut self, offset: f64) {
        self.offset_center = self.center.with_longitude_offset(offset);
    }
}
