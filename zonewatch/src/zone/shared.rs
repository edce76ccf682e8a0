//! Thread-safe registry wrapper and per-cycle parameter updates.
//!
//! A polling cycle first applies its radius and offset updates, then
//! evaluates one coordinate. [`SharedZoneRegistry`] applies a whole
//! [`ZoneAdjustments`] under one write lock, so a concurrent evaluation
//! sees either the previous parameters or the new ones, never a mix.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::ZoneRegistry;
use crate::evaluator::{evaluate, ZoneEvent};
use crate::geo::Coordinate;

/// Radius overrides and longitudinal offset for one evaluation cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneAdjustments {
    radii: Vec<(String, f64)>,
    longitudinal_offset: f64,
}

impl ZoneAdjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the radius for a name key.
    ///
    /// An existing key keeps its position and only its value changes;
    /// a new key is appended.
    pub fn set_radius(&mut self, key: impl Into<String>, radius: f64) {
        let key = key.into();
        match self.radii.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = radius,
            None => self.radii.push((key, radius)),
        }
    }

    /// Builder form of [`set_radius`](Self::set_radius).
    pub fn with_radius(mut self, key: impl Into<String>, radius: f64) -> Self {
        self.set_radius(key, radius);
        self
    }

    pub fn set_longitudinal_offset(&mut self, offset: f64) {
        self.longitudinal_offset = offset;
    }

    pub fn with_longitudinal_offset(mut self, offset: f64) -> Self {
        self.longitudinal_offset = offset;
        self
    }

    /// Radius overrides in application order.
    pub fn radii(&self) -> &[(String, f64)] {
        &self.radii
    }

    pub fn longitudinal_offset(&self) -> f64 {
        self.longitudinal_offset
    }

    /// Applies radii, then the offset, to `registry`.
    pub fn apply_to(&self, registry: &mut ZoneRegistry) {
        let assignments = registry.update_radii_by_key(
            self.radii.iter().map(|(key, radius)| (key.as_str(), *radius)),
        );
        registry.apply_longitudinal_offset(self.longitudinal_offset);

        tracing::trace!(
            keys = self.radii.len(),
            assignments,
            offset = self.longitudinal_offset,
            "Zone adjustments applied"
        );
    }
}

/// A zone registry shared between a configuring writer and evaluators.
///
/// Cloning is cheap and every clone refers to the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedZoneRegistry {
    inner: Arc<RwLock<ZoneRegistry>>,
}

impl SharedZoneRegistry {
    pub fn new(registry: ZoneRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Applies a cycle's adjustments in a single critical section.
    pub fn apply(&self, adjustments: &ZoneAdjustments) {
        adjustments.apply_to(&mut self.write());
    }

    /// Grouped radius update under the write lock.
    pub fn update_radii_by_key<I, K>(&self, updates: I) -> usize
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        self.write().update_radii_by_key(updates)
    }

    /// Longitudinal offset under the write lock.
    pub fn apply_longitudinal_offset(&self, offset: f64) {
        self.write().apply_longitudinal_offset(offset);
    }

    /// Evaluates a location against the current parameters.
    pub fn evaluate(&self, location: Coordinate) -> ZoneEvent {
        evaluate(location, &self.read())
    }

    /// Copy of the registry as it is right now.
    pub fn snapshot(&self) -> ZoneRegistry {
        self.read().clone()
    }

    /// Runs `f` with read access to the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&ZoneRegistry) -> R) -> R {
        f(&self.read())
    }

    // Every write runs to completion on plain values before the guard is
    // released, so a poisoned lock still holds a consistent registry.
    fn read(&self) -> RwLockReadGuard<'_, ZoneRegistry> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ZoneRegistry> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl From<ZoneRegistry> for SharedZoneRegistry {
    fn from(registry: ZoneRegistry) -> Self {
        Self::new(registry)
    }
}
