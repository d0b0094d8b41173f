use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{rain_probability, HourlyPoint, WeatherInput, WeatherSnapshot};

/// Hours of forecast used to judge stability
const STABILITY_HOURS: usize = 6;

/// Temperature spread over the next six hours, scaled to 0.0-1.0.
/// No hourly data counts as perfectly stable.
pub fn forecast_stability(hourly: &[HourlyPoint]) -> f64 {
    let range = hourly
        .iter()
        .take(STABILITY_HOURS)
        .map(|p| p.temperature)
        .fold(None, |acc: Option<(f64, f64)>, t| match acc {
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            None => Some((t, t)),
        });

    let spread = range.map(|(lo, hi)| hi - lo).unwrap_or(0.0);
    (spread / 10.0).min(1.0)
}

/// Derive the guidance metrics for one request
pub fn derive_input(
    weather: &WeatherSnapshot,
    hourly: &[HourlyPoint],
    thresholds: &GuidanceThresholds,
) -> WeatherInput {
    let lightning_risk = if weather.condition.is_stormy() {
        thresholds.storm_lightning_risk
    } else {
        thresholds.calm_lightning_risk
    };

    WeatherInput {
        temperature: weather.temperature,
        humidity: weather.humidity,
        rain_probability: rain_probability(weather.precipitation),
        wind_speed: weather.wind_speed,
        heat_index: weather.heat_index(),
        lightning_risk,
        forecast_stability: forecast_stability(hourly),
    }
}
