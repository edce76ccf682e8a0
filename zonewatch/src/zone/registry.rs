//! Ordered zone collection with grouped parameter updates.

use std::slice;

use super::Zone;

/// The set of zones consulted by the evaluator.
///
/// Insertion order is preserved and decides which zone wins when two
/// zones report exactly the same relative distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
}

impl ZoneRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `zones` in iteration order.
    pub fn from_zones(zones: impl IntoIterator<Item = Zone>) -> Self {
        Self {
            zones: zones.into_iter().collect(),
        }
    }

    /// Appends a zone at the lowest tie-break priority.
    pub fn add_zone(&mut self, zone: Zone) {
        tracing::debug!(zone = zone.name(), radius = zone.radius(), "Zone added");
        self.zones.push(zone);
    }

    /// Removes the first zone whose name equals `name` exactly.
    pub fn remove_zone(&mut self, name: &str) -> Option<Zone> {
        let index = self.zones.iter().position(|z| z.name() == name)?;
        Some(self.zones.remove(index))
    }

    /// Sets the radius of every zone whose name contains a key.
    ///
    /// Updates are applied in iteration order, so when several keys match
    /// the same zone the last one wins. Keys matching nothing are ignored.
    /// Returns the number of radius assignments made.
    ///
    /// # Example
    ///
    /// ```
    /// use zonewatch::zone::ZoneRegistry;
    ///
    /// let mut registry = ZoneRegistry::reference();
    /// registry.update_radii_by_key([("Blue", 50.0)]);
    ///
    /// assert_eq!(registry.get("Blue").unwrap().radius(), 50.0);
    /// assert_eq!(registry.get("DarkBlue").unwrap().radius(), 50.0);
    /// assert_eq!(registry.get("Red").unwrap().radius(), 30.0);
    /// ```
    pub fn update_radii_by_key<I, K>(&mut self, updates: I) -> usize
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut assignments = 0;

        for (key, radius) in updates {
            let key = key.as_ref();
            for zone in self.zones.iter_mut().filter(|z| z.name().contains(key)) {
                zone.set_radius(radius);
                assignments += 1;
            }
        }

        assignments
    }

    /// Shifts every zone's effective center east by `offset` degrees.
    ///
    /// Always recomputed from each zone's true center, so repeating the
    /// call with the same offset changes nothing.
    pub fn apply_longitudinal_offset(&mut self, offset: f64) {
        for zone in &mut self.zones {
            zone.apply_longitudinal_offset(offset);
        }
    }

    /// All zones in insertion order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn iter(&self) -> slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    /// First zone whose name equals `name` exactly.
    pub fn get(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name() == name)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl<'a> IntoIterator for &'a ZoneRegistry {
    type Item = &'a Zone;
    type IntoIter = slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
