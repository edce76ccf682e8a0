//! Watch command - poll a location source and report zone changes.
//!
//! Runs the zone monitor until Ctrl+C, until `--cycles` updates were
//! printed, or until a non-looping track has been played through.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use zonewatch::evaluator::NOT_POLLING_COLOR;
use zonewatch::geo::Coordinate;
use zonewatch::location::{FixedLocationProvider, LocationProvider, TrackLocationProvider};
use zonewatch::monitor::{poll_interval_from_setting, MonitorConfig, ZoneMonitor};
use zonewatch::zone::SharedZoneRegistry;

use super::common::{format_event, AdjustmentArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Where watched positions come from.
pub enum WatchSource {
    Fixed(Coordinate),
    Track { path: PathBuf, looping: bool },
}

/// Arguments for the watch command.
pub struct WatchArgs {
    pub source: WatchSource,
    pub interval: Option<u64>,
    pub interval_setting: Option<f64>,
    pub cycles: Option<usize>,
    pub adjust: AdjustmentArgs,
}

/// Run the watch command.
pub fn run(args: WatchArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("watch");

    let config = runner.config();
    let mut monitor_config = config.monitor_config();
    monitor_config.adjustments = args.adjust.resolve(config);
    if let Some(interval) = poll_interval_override(args.interval, args.interval_setting)? {
        monitor_config.poll_interval = interval;
    }

    let registry = SharedZoneRegistry::new(config.build_registry());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    match args.source {
        WatchSource::Fixed(coordinate) => {
            let provider = FixedLocationProvider::new(coordinate);
            runtime.block_on(watch(registry, provider, monitor_config, args.cycles))
        }
        WatchSource::Track { path, looping } => {
            let provider = TrackLocationProvider::load(&path)?.looping(looping);
            info!(path = %path.display(), positions = provider.len(), looping, "Loaded track");

            let cycles = track_cycle_limit(args.cycles, looping, provider.len());
            runtime.block_on(watch(registry, provider, monitor_config, cycles))
        }
    }
}

/// Poll interval requested on the command line, in seconds or as an
/// interval setting (`(setting + 1) * 5` seconds).
fn poll_interval_override(
    secs: Option<u64>,
    setting: Option<f64>,
) -> Result<Option<Duration>, CliError> {
    match (secs, setting) {
        (Some(0), _) => Err(CliError::InvalidArgument(
            "--interval must be at least 1 second".to_string(),
        )),
        (Some(secs), _) => Ok(Some(Duration::from_secs(secs))),
        (None, Some(setting)) if !setting.is_finite() => Err(CliError::InvalidArgument(
            "--interval-setting must be a number".to_string(),
        )),
        (None, Some(setting)) => Ok(Some(poll_interval_from_setting(setting))),
        (None, None) => Ok(None),
    }
}

/// Number of updates to print for a track.
///
/// A non-looping track only produces failed cycles once it has been played
/// through, so it never runs for more than one pass.
fn track_cycle_limit(cycles: Option<usize>, looping: bool, track_len: usize) -> Option<usize> {
    match (cycles, looping) {
        (Some(n), true) => Some(n),
        (Some(n), false) => Some(n.min(track_len)),
        (None, false) => Some(track_len),
        (None, true) => None,
    }
}

async fn watch<P: LocationProvider + 'static>(
    registry: SharedZoneRegistry,
    provider: P,
    config: MonitorConfig,
    cycles: Option<usize>,
) -> Result<(), CliError> {
    println!(
        "Watching {} zones every {}s (Ctrl+C to stop)",
        registry.with_registry(|r| r.len()),
        config.poll_interval.as_secs()
    );
    println!();

    let cancellation = CancellationToken::new();
    let handler_token = cancellation.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .map_err(|e| CliError::Runtime(format!("Failed to set signal handler: {}", e)))?;

    let (tx, mut rx) = mpsc::channel(16);
    let monitor = ZoneMonitor::new(registry, provider, config);
    let handle = monitor.spawn(cancellation.clone(), tx);

    let mut received = 0usize;
    loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(update) = update else { break };
                received += 1;
                println!("{}  {}", update.coordinate, format_event(&update.event));

                if cycles.is_some_and(|limit| received >= limit) {
                    cancellation.cancel();
                    break;
                }
            }
            _ = cancellation.cancelled() => break,
        }
    }

    handle
        .await
        .map_err(|e| CliError::Runtime(format!("Zone monitor task failed: {}", e)))?;

    println!();
    println!(
        "Stopped after {} update(s); display color {}",
        received, NOT_POLLING_COLOR
    );
    Ok(())
}
