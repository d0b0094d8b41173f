use super::{forecast_confidence, ModeRule};
use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{Decision, HourlyPoint, Mode, Triggers, WeatherInput, WorkStatus, WorkerDecision};

/// Outdoor work safety for labourers.
///
/// Status:
/// - UNSAFE: heat index at or above the unsafe line, or lightning risk above
///   the lightning line
/// - CAUTION: heat index at or above the caution line
/// - SAFE: otherwise
pub struct WorkerRule;

impl ModeRule for WorkerRule {
    fn mode(&self) -> Mode {
        Mode::Worker
    }

    fn name(&self) -> &'static str {
        "Work Safety"
    }

    fn decide(
        &self,
        input: &WeatherInput,
        hourly: &[HourlyPoint],
        thresholds: &GuidanceThresholds,
    ) -> Decision {
        let status = work_safety_status(input, thresholds);

        Decision::Worker(WorkerDecision {
            status,
            unsafe_hours: unsafe_work_hours(hourly, thresholds),
            advice: advice(status).to_string(),
            confidence: forecast_confidence(input.forecast_stability, thresholds),
            notify_when_safe: status == WorkStatus::Unsafe,
            triggers: Triggers {
                heat_index: Some(input.heat_index),
                lightning_risk: Some(input.lightning_risk),
                ..Default::default()
            },
        })
    }
}

pub fn work_safety_status(input: &WeatherInput, thresholds: &GuidanceThresholds) -> WorkStatus {
    if input.heat_index >= thresholds.worker_unsafe_heat_index
        || input.lightning_risk > thresholds.unsafe_lightning_risk
    {
        WorkStatus::Unsafe
    } else if input.heat_index >= thresholds.worker_caution_heat_index {
        WorkStatus::Caution
    } else {
        WorkStatus::Safe
    }
}

/// Time labels of every forecast hour too hot to work, in forecast order
pub fn unsafe_work_hours(hourly: &[HourlyPoint], thresholds: &GuidanceThresholds) -> Vec<String> {
    hourly
        .iter()
        .filter(|h| h.heat_index >= thresholds.worker_unsafe_heat_index)
        .map(|h| h.time.clone())
        .collect()
}

fn advice(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Unsafe => "Stop work immediately. Rest in shade. Hydrate frequently.",
        WorkStatus::Caution => "Take extra breaks every 30 minutes. Drink water regularly.",
        WorkStatus::Safe => "Conditions are safe for outdoor work. Stay hydrated.",
    }
}
