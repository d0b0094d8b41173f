pub mod engine;
pub mod explain;
pub mod farmer;
pub mod general;
pub mod inputs;
pub mod student;
pub mod worker;

pub use engine::GuidanceEngine;
pub use inputs::derive_input;

use super::thresholds::GuidanceThresholds;
use crate::models::{Decision, ForecastConfidence, HourlyPoint, Mode, WeatherInput};

/// Trait for mode-specific guidance rules
pub trait ModeRule: Send + Sync {
    /// Mode this rule answers for
    fn mode(&self) -> Mode;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce the structured decision for this mode
    fn decide(
        &self,
        input: &WeatherInput,
        hourly: &[HourlyPoint],
        thresholds: &GuidanceThresholds,
    ) -> Decision;
}

/// Map forecast stability (lower is steadier) to a confidence bucket.
///
/// Upper bounds are exclusive: a stability equal to a bound lands in the
/// lower-confidence bucket.
pub fn forecast_confidence(stability: f64, thresholds: &GuidanceThresholds) -> ForecastConfidence {
    if stability < thresholds.confidence_high_below {
        ForecastConfidence::High
    } else if stability < thresholds.confidence_medium_below {
        ForecastConfidence::Medium
    } else {
        ForecastConfidence::Low
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bucket_boundaries() {
        let t = GuidanceThresholds::default();
        assert_eq!(forecast_confidence(0.0, &t), ForecastConfidence::High);
        assert_eq!(forecast_confidence(0.29, &t), ForecastConfidence::High);
        assert_eq!(forecast_confidence(0.3, &t), ForecastConfidence::Medium);
        assert_eq!(forecast_confidence(0.59, &t), ForecastConfidence::Medium);
        assert_eq!(forecast_confidence(0.6, &t), ForecastConfidence::Low);
        assert_eq!(forecast_confidence(1.0, &t), ForecastConfidence::Low);
    }
}
