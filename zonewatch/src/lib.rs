//! zonewatch - proximity geofencing
//!
//! This library evaluates a geographic position against a registry of
//! circular zones and reports the nearest containing zone, with a display
//! color that lightens as the position approaches the zone's edge.
//!
//! # Example
//!
//! ```
//! use zonewatch::color::Color;
//! use zonewatch::evaluator::evaluate;
//! use zonewatch::geo::Coordinate;
//! use zonewatch::zone::{Zone, ZoneRegistry};
//!
//! let center = Coordinate::new(36.0730846, -95.9233244);
//! let mut registry = ZoneRegistry::new();
//! registry.add_zone(Zone::new("Blue", Color::BLUE, 30.0, center));
//!
//! let event = evaluate(center, &registry);
//! assert_eq!(event.zone_name(), "Blue");
//! assert_eq!(event.zone_color(), Color::BLUE);
//! ```
//!
//! For continuous monitoring see [`monitor::ZoneMonitor`].

pub mod color;
pub mod config;
pub mod evaluator;
pub mod geo;
pub mod location;
pub mod logging;
pub mod monitor;
pub mod zone;

/// Version of the zonewatch library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reference_layout_evaluates_outside_point() {
        let registry = zone::ZoneRegistry::reference();
        let event = evaluator::evaluate(geo::Coordinate::new(0.0, 0.0), &registry);
        assert!(!event.is_in_zone());
        assert_eq!(event.zone_name(), evaluator::NO_ZONE_NAME);
    }
}
