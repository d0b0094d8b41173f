use super::{
    explain::why_this_advice, farmer::FarmerRule, general::GeneralRule, student::StudentRule,
    worker::WorkerRule, ModeRule,
};
use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{Guidance, HourlyPoint, Mode, WeatherInput};

pub struct GuidanceEngine {
    thresholds: GuidanceThresholds,
}

impl GuidanceEngine {
    pub fn new(thresholds: GuidanceThresholds) -> Self {
        Self { thresholds }
    }

    fn rule_for(mode: Mode) -> &'static dyn ModeRule {
        match mode {
            Mode::General => &GeneralRule,
            Mode::Student => &StudentRule,
            Mode::Farmer => &FarmerRule,
            Mode::Worker => &WorkerRule,
        }
    }

    /// Decide for one mode and attach the explanation
    pub fn evaluate(&self, mode: Mode, input: &WeatherInput, hourly: &[HourlyPoint]) -> Guidance {
        let rule = Self::rule_for(mode);
        tracing::debug!(mode = %mode, rule = rule.name(), "Evaluating guidance");

        let decision = rule.decide(input, hourly, &self.thresholds);
        tracing::debug!(confidence = ?decision.confidence(), "Guidance decided");
        let why_this_advice = why_this_advice(decision.triggers(), &self.thresholds);

        Guidance {
            decision,
            why_this_advice,
        }
    }

    pub fn list_rules(&self) -> Vec<(Mode, &'static str)> {
        Mode::ALL
            .iter()
            .map(|mode| {
                let rule = Self::rule_for(*mode);
                (rule.mode(), rule.name())
            })
            .collect()
    }
}

impl Default for GuidanceEngine {
    fn default() -> Self {
        Self::new(GuidanceThresholds::default())
    }
}
