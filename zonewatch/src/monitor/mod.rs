//! Polling zone monitor.
//!
//! Each cycle applies the current zone adjustments, asks the location
//! provider for a position, and evaluates it against the registry:
//!
//! 1. Radius overrides and longitudinal offset are applied in one write
//!    section of the [`SharedZoneRegistry`]
//! 2. The [`LocationProvider`] is queried; a failure skips the cycle
//! 3. The position is evaluated and published as a [`MonitorUpdate`]
//!
//! # Usage
//!
//! ```ignore
//! use zonewatch::location::FixedLocationProvider;
//! use zonewatch::monitor::{MonitorConfig, ZoneMonitor};
//! use zonewatch::zone::{SharedZoneRegistry, ZoneRegistry};
//! use tokio_util::sync::CancellationToken;
//!
//! let registry = SharedZoneRegistry::new(ZoneRegistry::reference());
//! let monitor = ZoneMonitor::new(registry, provider, MonitorConfig::default());
//! let controls = monitor.controls();
//!
//! let (tx, mut rx) = tokio::sync::mpsc::channel(16);
//! let cancellation = CancellationToken::new();
//! let handle = monitor.spawn(cancellation.clone(), tx);
//!
//! controls.set_radius("Blue", 45.0); // picked up on the next cycle
//! while let Some(update) = rx.recv().await {
//!     println!("{}", update.event);
//! }
//! ```

mod calibration;

pub use calibration::{
    offset_from_calibration_steps, poll_interval_from_setting, DEGREES_PER_CALIBRATION_STEP,
    POLL_INTERVAL_STEP_SECS,
};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::evaluator::ZoneEvent;
use crate::geo::Coordinate;
use crate::location::LocationProvider;
use crate::zone::{SharedZoneRegistry, ZoneAdjustments};

/// Default time between polling cycles (20 seconds).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);

/// Configuration for the zone monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between polling cycles.
    pub poll_interval: Duration,

    /// Adjustments applied at the start of every cycle.
    pub adjustments: ZoneAdjustments,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            adjustments: ZoneAdjustments::default(),
        }
    }
}

/// Result of one successful polling cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorUpdate {
    /// Position reported by the provider.
    pub coordinate: Coordinate,
    /// Zone evaluation for that position.
    pub event: ZoneEvent,
}

/// Handle for changing zone adjustments while a monitor runs.
///
/// Changes take effect at the start of the next cycle.
#[derive(Debug, Clone)]
pub struct MonitorControls {
    tx: Arc<watch::Sender<ZoneAdjustments>>,
}

impl MonitorControls {
    pub fn set_radius(&self, key: &str, radius: f64) {
        self.tx.send_modify(|a| a.set_radius(key, radius));
    }

    pub fn set_longitudinal_offset(&self, offset: f64) {
        self.tx.send_modify(|a| a.set_longitudinal_offset(offset));
    }

    /// Replaces all adjustments at once.
    pub fn set_adjustments(&self, adjustments: ZoneAdjustments) {
        self.tx.send_replace(adjustments);
    }

    /// Adjustments the next cycle will apply.
    pub fn current(&self) -> ZoneAdjustments {
        self.tx.borrow().clone()
    }
}

/// Polls a location provider and evaluates each position.
pub struct ZoneMonitor<P> {
    registry: SharedZoneRegistry,
    provider: P,
    poll_interval: Duration,
    adjustments_tx: Arc<watch::Sender<ZoneAdjustments>>,
    adjustments_rx: watch::Receiver<ZoneAdjustments>,
    current_zone: Option<String>,
}

impl<P: LocationProvider> ZoneMonitor<P> {
    pub fn new(registry: SharedZoneRegistry, provider: P, config: MonitorConfig) -> Self {
        let (tx, rx) = watch::channel(config.adjustments);
        Self {
            registry,
            provider,
            poll_interval: config.poll_interval,
            adjustments_tx: Arc::new(tx),
            adjustments_rx: rx,
            current_zone: None,
        }
    }

    /// Controls for changing adjustments from other tasks.
    pub fn controls(&self) -> MonitorControls {
        MonitorControls {
            tx: Arc::clone(&self.adjustments_tx),
        }
    }

    pub fn registry(&self) -> &SharedZoneRegistry {
        &self.registry
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Runs a single polling cycle.
    ///
    /// Returns `None` when the provider could not supply a position. The
    /// failure is logged and the monitor stays usable.
    pub async fn poll_once(&mut self) -> Option<MonitorUpdate> {
        let adjustments = self.adjustments_rx.borrow_and_update().clone();
        self.registry.apply(&adjustments);

        let coordinate = match self.provider.current_coordinate().await {
            Ok(coordinate) => coordinate,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "No location this cycle"
                );
                return None;
            }
        };

        let event = self.registry.evaluate(coordinate);
        self.track_transition(&event);

        tracing::debug!(
            lat = format!("{:.7}", coordinate.latitude),
            lon = format!("{:.7}", coordinate.longitude),
            zone = event.zone_name(),
            distance_m = format!("{:.0}", event.distance_from_zone_meters()),
            relative = format!("{:.2}", event.relative_distance_from_zone()),
            color = %event.zone_color(),
            "Zone evaluation"
        );

        Some(MonitorUpdate { coordinate, event })
    }

    fn track_transition(&mut self, event: &ZoneEvent) {
        let zone = event.is_in_zone().then(|| event.zone_name().to_string());
        if zone == self.current_zone {
            return;
        }

        match (&self.current_zone, &zone) {
            (Some(from), Some(to)) => tracing::info!(from = %from, to = %to, "Moved between zones"),
            (None, Some(to)) => tracing::info!(zone = %to, "Entered zone"),
            (Some(from), None) => tracing::info!(zone = %from, "Left zone"),
            (None, None) => {}
        }

        self.current_zone = zone;
    }
}

impl<P: LocationProvider + 'static> ZoneMonitor<P> {
    /// Spawns the polling loop on the tokio runtime.
    ///
    /// The first cycle runs immediately, then every poll interval. The
    /// loop stops when `cancellation` fires or the receiving side of
    /// `updates` is dropped.
    pub fn spawn(
        mut self,
        cancellation: CancellationToken,
        updates: mpsc::Sender<MonitorUpdate>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!(
                provider = self.provider.name(),
                interval_secs = self.poll_interval.as_secs_f64(),
                "Zone monitor started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let Some(update) = self.poll_once().await else {
                            continue;
                        };
                        if updates.send(update).await.is_err() {
                            tracing::debug!("Update receiver dropped, stopping zone monitor");
                            break;
                        }
                    }
                    _ = cancellation.cancelled() => {
                        tracing::info!("Zone monitor stopped");
                        break;
                    }
                }
            }
        })
    }
}
