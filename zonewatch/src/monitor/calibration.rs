//! Conversions from user-facing settings to engine parameters.

use std::time::Duration;

/// Longitude shift per calibration step, in degrees. Positive steps move
/// every zone west.
pub const DEGREES_PER_CALIBRATION_STEP: f64 = 0.00005;

/// Shortest poll interval the interval setting can produce.
pub const POLL_INTERVAL_STEP_SECS: f64 = 5.0;

/// Longitudinal offset for a calibration slider position.
///
/// Each step shifts the zones 0.00005 degrees west (about 4.5 m at
/// mid-latitudes).
pub fn offset_from_calibration_steps(steps: f64) -> f64 {
    -1.0 * (DEGREES_PER_CALIBRATION_STEP * steps)
}

/// Poll interval for an interval setting, in five second increments.
///
/// Setting `0` polls every 5 s, `3` every 20 s. Fractional settings round
/// to the nearest second with halves going to the even second. Negative
/// settings clamp to the shortest interval.
pub fn poll_interval_from_setting(setting: f64) -> Duration {
    let secs = ((setting + 1.0) * POLL_INTERVAL_STEP_SECS).round_ties_even();
    Duration::from_secs(secs.max(POLL_INTERVAL_STEP_SECS) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_calibration_steps() {
        assert_eq!(offset_from_calibration_steps(0.0), -0.0);
        assert!((offset_from_calibration_steps(4.0) - -0.0002).abs() < 1e-15);
        assert!((offset_from_calibration_steps(-2.0) - 0.0001).abs() < 1e-15);
    }

    #[test]
    fn test_poll_interval_from_setting() {
        assert_eq!(poll_interval_from_setting(0.0), Duration::from_secs(5));
        assert_eq!(poll_interval_from_setting(3.0), Duration::from_secs(20));
        assert_eq!(poll_interval_from_setting(1.4), Duration::from_secs(12));
        assert_eq!(poll_interval_from_setting(-4.0), Duration::from_secs(5));
    }

    #[test]
    fn test_poll_interval_halves_round_to_even() {
        // 12.5 s and 7.5 s
        assert_eq!(poll_interval_from_setting(1.5), Duration::from_secs(12));
        assert_eq!(poll_interval_from_setting(0.5), Duration::from_secs(8));
    }
}
