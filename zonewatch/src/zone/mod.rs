//! Zones and the zone registry.
//!
//! A [`Zone`] is a named circle with a base color. The [`ZoneRegistry`]
//! owns an ordered set of zones and supports the two parameter updates
//! the application performs between evaluations: grouped radius changes
//! keyed by name substring, and a shared longitudinal offset.
//!
//! The registry is a plain value owned by the caller. Use
//! [`SharedZoneRegistry`] when updates and evaluations happen on
//! different tasks.

mod model;
mod reference;
mod registry;
mod shared;

pub use model::Zone;
pub use reference::{
    DEFAULT_ZONE_RADIUS_METERS, WIDE_ZONE_RADIUS_METERS, ZONE_NAME_BLUE, ZONE_NAME_GREEN,
    ZONE_NAME_RED,
};
pub use registry::ZoneRegistry;
pub use shared::{SharedZoneRegistry, ZoneAdjustments};
