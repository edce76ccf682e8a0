//! zonewatch CLI - Command-line interface
//!
//! Evaluates positions against circular zones and watches a location
//! source for zone changes.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zonewatch::geo::Coordinate;

use commands::common::AdjustmentArgs;
use commands::config::ConfigCommands;
use commands::evaluate::EvaluateArgs;
use commands::watch::{WatchArgs, WatchSource};
use error::CliError;

#[derive(Parser)]
#[command(name = "zonewatch")]
#[command(version = zonewatch::VERSION)]
#[command(about = "Proximity geofencing with color-shaded zones", long_about = None)]
struct Cli {
    /// Log at debug level and echo log events to stderr (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured zones
    Zones {
        #[command(flatten)]
        adjust: AdjustmentArgs,
    },

    /// Evaluate a single position
    Evaluate {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[command(flatten)]
        adjust: AdjustmentArgs,
    },

    /// Poll a position source and report the zone each cycle
    Watch {
        /// Latitude of a fixed position
        #[arg(long, allow_hyphen_values = true, requires = "lon", conflicts_with = "track")]
        lat: Option<f64>,

        /// Longitude of a fixed position
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Replay positions from a track file (one "lat,lon" per line)
        #[arg(long, required_unless_present = "lat")]
        track: Option<PathBuf>,

        /// Restart the track from the beginning when it runs out
        #[arg(long = "loop", requires = "track")]
        looping: bool,

        /// Seconds between polls (overrides polling.interval_secs)
        #[arg(long, conflicts_with = "interval_setting")]
        interval: Option<u64>,

        /// Poll interval setting: polls every (SETTING + 1) * 5 seconds
        #[arg(long, value_name = "SETTING")]
        interval_setting: Option<f64>,

        /// Stop after this many updates
        #[arg(long)]
        cycles: Option<usize>,

        #[command(flatten)]
        adjust: AdjustmentArgs,
    },

    /// View and modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    let result = match cli.command {
        Commands::Zones { adjust } => commands::zones::run(adjust, debug),
        Commands::Evaluate { lat, lon, adjust } => {
            commands::evaluate::run(EvaluateArgs { lat, lon, adjust }, debug)
        }
        Commands::Watch {
            lat,
            lon,
            track,
            looping,
            interval,
            interval_setting,
            cycles,
            adjust,
        } => watch_source(lat, lon, track, looping).and_then(|source| {
            commands::watch::run(
                WatchArgs {
                    source,
                    interval,
                    interval_setting,
                    cycles,
                    adjust,
                },
                debug,
            )
        }),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

fn watch_source(
    lat: Option<f64>,
    lon: Option<f64>,
    track: Option<PathBuf>,
    looping: bool,
) -> Result<WatchSource, CliError> {
    match (lat, lon, track) {
        (_, _, Some(path)) => Ok(WatchSource::Track { path, looping }),
        (Some(lat), Some(lon), None) => Ok(WatchSource::Fixed(Coordinate::new(lat, lon))),
        _ => Err(CliError::InvalidArgument(
            "either --lat and --lon or --track is required".to_string(),
        )),
    }
}
