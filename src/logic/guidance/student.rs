use super::general::general_decision;
use super::ModeRule;
use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{Decision, HourlyPoint, Mode, StudentDecision, StudyComfort, WeatherInput};

/// General guidance plus a study comfort rating
pub struct StudentRule;

impl ModeRule for StudentRule {
    fn mode(&self) -> Mode {
        Mode::Student
    }

    fn name(&self) -> &'static str {
        "Study Comfort"
    }

    fn decide(
        &self,
        input: &WeatherInput,
        hourly: &[HourlyPoint],
        thresholds: &GuidanceThresholds,
    ) -> Decision {
        let study_comfort = if input.heat_index < thresholds.study_comfort_heat_index {
            StudyComfort::Good
        } else {
            StudyComfort::Poor
        };

        Decision::Student(StudentDecision {
            general: general_decision(input, hourly, thresholds),
            study_comfort,
        })
    }
}
