//! Nearest containing zone selection.
//!
//! Zones overlap in pairs on purpose, so the first zone that contains a
//! point is not necessarily the right answer. The evaluator picks the zone
//! whose center is relatively closest, measured as a fraction of each
//! zone's own radius.

mod event;

pub use event::{ZoneEvent, NOT_POLLING_COLOR, NO_ZONE_COLOR, NO_ZONE_NAME};

use crate::color::display_color;
use crate::geo::{distance_meters, Coordinate};
use crate::zone::ZoneRegistry;

/// Finds the zone that most deeply contains `location`.
///
/// A zone contains a point when the distance to its offset center is
/// strictly less than its radius, so points on the boundary are outside.
/// Zones with a radius of zero or less never contain anything. Among
/// candidates the lowest relative distance wins; on an exact tie the zone
/// registered first is kept.
///
/// # Example
///
/// ```
/// use zonewatch::evaluator::evaluate;
/// use zonewatch::geo::Coordinate;
/// use zonewatch::zone::ZoneRegistry;
///
/// let registry = ZoneRegistry::reference();
/// let event = evaluate(Coordinate::new(36.0730846, -95.9233244), &registry);
///
/// assert_eq!(event.zone_name(), "Blue");
/// assert_eq!(event.relative_distance_from_zone(), 0.0);
/// ```
pub fn evaluate(location: Coordinate, registry: &ZoneRegistry) -> ZoneEvent {
    let mut best = ZoneEvent::none();

    for zone in registry {
        if !zone.is_active() {
            continue;
        }

        let distance = distance_meters(location, zone.offset_center());
        if distance >= zone.radius() {
            continue;
        }

        let relative = distance / zone.radius();
        if relative < best.relative_distance_from_zone() {
            best = ZoneEvent::inside(
                zone,
                display_color(zone.color(), relative),
                distance,
                relative,
            );
        }
    }

    best
}
