//! Zones command - list the configured zone registry.

use zonewatch::zone::ZoneRegistry;

use super::common::AdjustmentArgs;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the zones command.
pub fn run(adjust: AdjustmentArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("zones");

    let config = runner.config();
    let mut registry = config.build_registry();
    adjust.resolve(config).apply_to(&mut registry);

    print_registry(&registry);
    Ok(())
}

fn print_registry(registry: &ZoneRegistry) {
    if registry.is_empty() {
        println!("No zones configured.");
        return;
    }

    println!(
        "{:<12} {:<10} {:>8}  {:<26} {}",
        "ZONE", "COLOR", "RADIUS", "CENTER", "EFFECTIVE CENTER"
    );
    for zone in registry {
        let radius = if zone.is_active() {
            format!("{:.0} m", zone.radius())
        } else {
            "off".to_string()
        };
        println!(
            "{:<12} {:<10} {:>8}  {:<26} {}",
            zone.name(),
            zone.color().to_string(),
            radius,
            zone.center().to_string(),
            zone.offset_center()
        );
    }
}
