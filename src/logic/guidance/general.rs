use super::{forecast_confidence, ModeRule};
use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{Decision, GeneralDecision, HourlyPoint, Mode, SixHourRisk, Triggers, WeatherInput};

/// Hours scanned for the short-range risk call
const NEAR_TERM_HOURS: usize = 6;

/// Everyday guidance: one key tip plus a six-hour outlook.
pub struct GeneralRule;

impl ModeRule for GeneralRule {
    fn mode(&self) -> Mode {
        Mode::General
    }

    fn name(&self) -> &'static str {
        "Key Tip & 6-Hour Risk"
    }

    fn decide(
        &self,
        input: &WeatherInput,
        hourly: &[HourlyPoint],
        thresholds: &GuidanceThresholds,
    ) -> Decision {
        Decision::General(general_decision(input, hourly, thresholds))
    }
}

pub(super) fn general_decision(
    input: &WeatherInput,
    hourly: &[HourlyPoint],
    thresholds: &GuidanceThresholds,
) -> GeneralDecision {
    let risk = next_6_hour_risk(hourly, thresholds);

    let advice = match risk {
        SixHourRisk::Risky => "Plan indoor activities. Carry umbrella if going out.",
        SixHourRisk::Safe => "Good conditions for outdoor plans. Stay hydrated.",
    };

    GeneralDecision {
        key_tip: todays_key_tip(input, thresholds).to_string(),
        next_6h_risk: risk,
        advice: advice.to_string(),
        confidence: forecast_confidence(input.forecast_stability, thresholds),
        triggers: Triggers {
            rain_probability: Some(input.rain_probability),
            heat_index: Some(input.heat_index),
            ..Default::default()
        },
    }
}

/// The single most important tip; rain outranks heat
pub fn todays_key_tip(input: &WeatherInput, thresholds: &GuidanceThresholds) -> &'static str {
    if input.rain_probability > thresholds.tip_rain {
        "Avoid travel in the evening due to rain"
    } else if input.heat_index > thresholds.tip_heat_index {
        "Limit outdoor activity at midday"
    } else {
        "Weather conditions are generally comfortable"
    }
}

pub fn next_6_hour_risk(hourly: &[HourlyPoint], thresholds: &GuidanceThresholds) -> SixHourRisk {
    let risky = hourly
        .iter()
        .take(NEAR_TERM_HOURS)
        .any(|h| h.rain_probability > thresholds.risky_hour_rain);

    if risky {
        SixHourRisk::Risky
    } else {
        SixHourRisk::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::guidance::test_support::{hour, input};

    #[test]
    fn rain_tip_beats_heat_tip() {
        let t = GuidanceThresholds::default();
        let mut weather = input();
        weather.rain_probability = 0.7;
        weather.heat_index = 45.0;
        assert_eq!(
            todays_key_tip(&weather, &t),
            "Avoid travel in the evening due to rain"
        );

        weather.rain_probability = 0.6;
        assert_eq!(todays_key_tip(&weather, &t), "Limit outdoor activity at midday");

        weather.heat_index = 38.0;
        assert_eq!(
            todays_key_tip(&weather, &t),
            "Weather conditions are generally comfortable"
        );
    }

    #[test]
    fn only_first_six_hours_count() {
        let t = GuidanceThresholds::default();
        let mut hourly: Vec<HourlyPoint> = (0..6)
            .map(|i| hour(&format!("{:02}:00", i), 0.6, 30.0))
            .collect();
        assert_eq!(next_6_hour_risk(&hourly, &t), SixHourRisk::Safe);

        hourly.push(hour("06:00", 0.9, 30.0));
        assert_eq!(next_6_hour_risk(&hourly, &t), SixHourRisk::Safe);

        hourly[5].rain_probability = 0.61;
        assert_eq!(next_6_hour_risk(&hourly, &t), SixHourRisk::Risky);
    }

    #[test]
    fn advice_follows_six_hour_risk() {
        let t = GuidanceThresholds::default();
        let mut weather = input();
        weather.rain_probability = 0.9;

        // Current rain does not change the advice; only the hourly outlook does
        let decision = general_decision(&weather, &[hour("12:00", 0.1, 30.0)], &t);
        assert_eq!(decision.next_6h_risk, SixHourRisk::Safe);
        assert_eq!(
            decision.advice,
            "Good conditions for outdoor plans. Stay hydrated."
        );

        let decision = general_decision(&weather, &[hour("12:00", 0.8, 30.0)], &t);
        assert_eq!(decision.next_6h_risk, SixHourRisk::Risky);
        assert_eq!(
            decision.advice,
            "Plan indoor activities. Carry umbrella if going out."
        );
        assert_eq!(decision.triggers.rain_probability, Some(0.9));
        assert_eq!(decision.triggers.heat_index, Some(weather.heat_index));
        assert!(decision.triggers.wind_speed.is_none());
    }
}
