use super::{forecast_confidence, ModeRule};
use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{
    CropRisk, Decision, FarmerDecision, HourlyPoint, Mode, SprayingSuitability, Triggers,
    WeatherInput,
};

/// Crop risk and spraying window for farmers.
///
/// Spraying is suitable only when rain is unlikely and the wind is calm.
/// Crop risk follows rain probability alone.
pub struct FarmerRule;

impl ModeRule for FarmerRule {
    fn mode(&self) -> Mode {
        Mode::Farmer
    }

    fn name(&self) -> &'static str {
        "Crop Risk & Spraying"
    }

    fn decide(
        &self,
        input: &WeatherInput,
        _hourly: &[HourlyPoint],
        thresholds: &GuidanceThresholds,
    ) -> Decision {
        let risk = crop_risk(input, thresholds);
        let spraying = spraying_suitability(input, thresholds);

        // A MEDIUM risk wins over a suitable spraying call; only LOW risk
        // combined with suitable spraying opens the full window.
        let (safe_window, advice) = match (spraying, risk) {
            (SprayingSuitability::Suitable, CropRisk::Low) => (
                "6 AM - 10 AM",
                "Apply fertilizer or pesticide now. Window closes at 10 AM.",
            ),
            (_, CropRisk::Medium) => (
                "Early morning only (before 8 AM)",
                "Work quickly. Rain risk increases after 8 AM.",
            ),
            _ => (
                "No safe window today",
                "Avoid spraying. High rain risk will wash away chemicals.",
            ),
        };

        Decision::Farmer(FarmerDecision {
            risk_level: risk,
            spraying_suitable: spraying,
            safe_window: safe_window.to_string(),
            advice: advice.to_string(),
            confidence: forecast_confidence(input.forecast_stability, thresholds),
            triggers: Triggers {
                rain_probability: Some(input.rain_probability),
                wind_speed: Some(input.wind_speed),
                ..Default::default()
            },
        })
    }
}

pub fn spraying_suitability(
    input: &WeatherInput,
    thresholds: &GuidanceThresholds,
) -> SprayingSuitability {
    if input.rain_probability < thresholds.spraying_max_rain
        && input.wind_speed < thresholds.spraying_max_wind_kmh
    {
        SprayingSuitability::Suitable
    } else {
        SprayingSuitability::NotSuitable
    }
}

pub fn crop_risk(input: &WeatherInput, thresholds: &GuidanceThresholds) -> CropRisk {
    if input.rain_probability > thresholds.crop_high_rain {
        CropRisk::High
    } else if input.rain_probability > thresholds.crop_medium_rain {
        CropRisk::Medium
    } else {
        CropRisk::Low
    }
}
