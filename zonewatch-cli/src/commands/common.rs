//! Common argument types and helpers shared across CLI commands.

use clap::Args;
use zonewatch::config::ConfigFile;
use zonewatch::evaluator::ZoneEvent;
use zonewatch::monitor::offset_from_calibration_steps;
use zonewatch::zone::ZoneAdjustments;

/// Zone adjustment flags accepted by commands that evaluate positions.
#[derive(Debug, Clone, Default, Args)]
pub struct AdjustmentArgs {
    /// Radius override as KEY=METERS; applies to every zone whose name
    /// contains KEY (repeatable, overrides the config file)
    #[arg(long = "radius", value_name = "KEY=METERS", value_parser = parse_radius_override)]
    pub radius: Vec<(String, f64)>,

    /// Calibration steps for the longitudinal offset (overrides the config file)
    #[arg(long, value_name = "STEPS", allow_hyphen_values = true)]
    pub offset_steps: Option<f64>,
}

impl AdjustmentArgs {
    /// Config file adjustments with the command-line flags layered on top.
    pub fn resolve(&self, config: &ConfigFile) -> ZoneAdjustments {
        let mut adjustments = config.adjustments();
        for (key, meters) in &self.radius {
            adjustments.set_radius(key.clone(), *meters);
        }
        if let Some(steps) = self.offset_steps {
            adjustments.set_longitudinal_offset(offset_from_calibration_steps(steps));
        }
        adjustments
    }
}

/// Parse a `KEY=METERS` radius override.
pub fn parse_radius_override(s: &str) -> Result<(String, f64), String> {
    let (key, meters) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=METERS, got '{}'", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err("radius key must not be empty".to_string());
    }

    let meters: f64 = meters
        .trim()
        .parse()
        .map_err(|_| format!("invalid radius '{}'", meters.trim()))?;
    if !meters.is_finite() || meters < 0.0 {
        return Err(format!("radius must be a non-negative number, got {}", meters));
    }

    Ok((key.to_string(), meters))
}

/// One-line summary of an evaluation for terminal output.
pub fn format_event(event: &ZoneEvent) -> String {
    format!("{}  color {}", event.describe(), event.zone_color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radius_override() {
        assert_eq!(
            parse_radius_override("Blue=45").unwrap(),
            ("Blue".to_string(), 45.0)
        );
        assert_eq!(
            parse_radius_override(" Dark = 0 ").unwrap(),
            ("Dark".to_string(), 0.0)
        );
    }

    #[test]
    fn test_parse_radius_override_errors() {
        assert!(parse_radius_override("Blue").is_err());
        assert!(parse_radius_override("=30").is_err());
        assert!(parse_radius_override("Blue=wide").is_err());
        assert!(parse_radius_override("Blue=-3").is_err());
    }

    #[test]
    fn test_flags_layer_over_config() {
        let mut config = ConfigFile::default();
        config.radius.set("Blue", 30.0);
        config.calibration.steps = 2.0;

        let args = AdjustmentArgs {
            radius: vec![("Blue".to_string(), 50.0), ("Red".to_string(), 10.0)],
            offset_steps: Some(4.0),
        };
        let adjustments = args.resolve(&config);

        assert_eq!(
            adjustments.radii(),
            &[("Blue".to_string(), 50.0), ("Red".to_string(), 10.0)]
        );
        assert!((adjustments.longitudinal_offset() + 0.0002).abs() < 1e-12);
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let mut config = ConfigFile::default();
        config.calibration.steps = 1.0;

        let adjustments = AdjustmentArgs::default().resolve(&config);
        assert!((adjustments.longitudinal_offset() + 0.00005).abs() < 1e-12);
        assert!(adjustments.radii().is_empty());
    }
}
