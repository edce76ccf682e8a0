//! Evaluate command - evaluate a single position against the zones.

use tracing::info;
use zonewatch::evaluator::evaluate;
use zonewatch::geo::Coordinate;

use super::common::{format_event, AdjustmentArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the evaluate command.
pub struct EvaluateArgs {
    pub lat: f64,
    pub lon: f64,
    pub adjust: AdjustmentArgs,
}

/// Run the evaluate command.
pub fn run(args: EvaluateArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("evaluate");

    let config = runner.config();
    let mut registry = config.build_registry();
    args.adjust.resolve(config).apply_to(&mut registry);

    let location = Coordinate::new(args.lat, args.lon);
    let event = evaluate(location, &registry);

    info!(
        location = %location,
        zone = event.zone_name(),
        relative = event.relative_distance_from_zone(),
        "Evaluated position"
    );

    println!("Position: {}", location);
    println!("{}", format_event(&event));

    Ok(())
}
