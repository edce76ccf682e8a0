//! Integration tests for the polling zone monitor.
//!
//! These tests run the monitor task on a paused tokio clock and check the
//! stream of updates it publishes, plus the config-to-monitor path.
//!
//! Run with: `cargo test --test monitor_integration`

use std::time::Duration;

use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use zonewatch::config::ConfigFile;
use zonewatch::evaluator::NO_ZONE_NAME;
use zonewatch::geo::Coordinate;
use zonewatch::location::{FixedLocationProvider, TrackLocationProvider};
use zonewatch::monitor::{MonitorConfig, ZoneMonitor};
use zonewatch::zone::{SharedZoneRegistry, ZoneRegistry};

// ============================================================================
// Test Helpers
// ============================================================================

const BLUE_CENTER: Coordinate = Coordinate::new(36.0730846, -95.9233244);
const NOWHERE: Coordinate = Coordinate::new(0.0, 0.0);

fn reference() -> SharedZoneRegistry {
    SharedZoneRegistry::new(ZoneRegistry::reference())
}

fn fast_config() -> MonitorConfig {
    MonitorConfig {
        poll_interval: Duration::from_secs(5),
        ..Default::default()
    }
}

// ============================================================================
// Monitor Task
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_spawned_monitor_publishes_track_positions() {
    let provider = TrackLocationProvider::new(vec![BLUE_CENTER, NOWHERE, BLUE_CENTER]);
    let monitor = ZoneMonitor::new(reference(), provider, fast_config());

    let (tx, mut rx) = mpsc::channel(8);
    let cancellation = CancellationToken::new();
    let handle = monitor.spawn(cancellation.clone(), tx);

    let mut zones = Vec::new();
    for _ in 0..3 {
        let update = rx.recv().await.expect("monitor should publish");
        zones.push(update.event.zone_name().to_string());
    }
    assert_eq!(zones, vec!["Blue", NO_ZONE_NAME, "Blue"]);

    cancellation.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_monitor_stops_when_receiver_dropped() {
    let monitor = ZoneMonitor::new(
        reference(),
        FixedLocationProvider::new(BLUE_CENTER),
        fast_config(),
    );

    let (tx, mut rx) = mpsc::channel(1);
    let handle = monitor.spawn(CancellationToken::new(), tx);

    assert!(rx.recv().await.is_some());
    drop(rx);

    tokio::time::timeout(Duration::from_secs(60), handle)
        .await
        .expect("monitor should stop without a receiver")
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_controls_reach_running_monitor() {
    let monitor = ZoneMonitor::new(
        reference(),
        FixedLocationProvider::new(BLUE_CENTER),
        fast_config(),
    );
    let controls = monitor.controls();

    let (tx, mut rx) = mpsc::channel(8);
    let cancellation = CancellationToken::new();
    let handle = monitor.spawn(cancellation.clone(), tx);

    assert_eq!(rx.recv().await.unwrap().event.zone_name(), "Blue");

    // Disabling Blue hands the position to the overlapping Red zone
    controls.set_radius("Blue", 0.0);
    let mut update = rx.recv().await.unwrap();
    // A cycle may already have been queued before the change
    if update.event.zone_name() == "Blue" {
        update = rx.recv().await.unwrap();
    }
    assert_eq!(update.event.zone_name(), "Red");

    cancellation.cancel();
    handle.await.unwrap();
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_config_file_drives_monitor() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");
    std::fs::write(
        &path,
        "[radius]\n\
         Depot = 50\n\
         \n\
         [polling]\n\
         interval_secs = 7\n\
         \n\
         [zone.Depot]\n\
         color = orange\n\
         radius = 10\n\
         latitude = 36.0730846\n\
         longitude = -95.9233244\n",
    )
    .unwrap();

    let config = ConfigFile::load_from(&path).unwrap();
    let monitor_config = config.monitor_config();
    assert_eq!(monitor_config.poll_interval, Duration::from_secs(7));

    // 0.0003 degrees north is about 33 m: outside 10 m, inside the 50 m override
    let position = Coordinate::new(BLUE_CENTER.latitude + 0.0003, BLUE_CENTER.longitude);
    let registry = SharedZoneRegistry::new(config.build_registry());
    let mut monitor = ZoneMonitor::new(
        registry,
        FixedLocationProvider::new(position),
        monitor_config,
    );

    let update = monitor.poll_once().await.unwrap();
    assert_eq!(update.event.zone_name(), "Depot");
    assert!(update.event.relative_distance_from_zone() < 1.0);
}

#[test]
fn test_saved_config_round_trips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.ini");

    let mut config = ConfigFile::default();
    config.radius.set("Blue", 42.0);
    config.calibration.steps = 3.0;
    config.polling.interval_secs = 15;
    config.save_to(&path).unwrap();

    let loaded = ConfigFile::load_from(&path).unwrap();
    assert_eq!(loaded.radius.get("Blue"), Some(42.0));
    assert_eq!(loaded.calibration.steps, 3.0);
    assert_eq!(loaded.polling.interval_secs, 15);
    assert_eq!(loaded.build_registry(), ZoneRegistry::reference());
}
