use serde::{Deserialize, Serialize};

/// Every tunable threshold the detector and guidance rules read.
///
/// Loaded once from config and passed by reference; nothing reads these
/// values from global state. The hazard surface and the worker decision use
/// distinct heat thresholds on purpose.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Thresholds {
    #[serde(default)]
    pub signals: SignalThresholds,
    #[serde(default)]
    pub guidance: GuidanceThresholds,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalThresholds {
    /// mm/h, inclusive
    pub heavy_rain_mm: f64,
    /// mm/h, exclusive
    pub flood_rain_mm: f64,
    /// Districts whose name contains this are flood-prone
    pub flood_district: String,
    /// km/h, inclusive
    pub cyclone_wind_kmh: f64,
    /// Heat index, inclusive
    pub heat_stress_index: f64,
    /// Reported value for lightning signals (percent)
    pub lightning_probability: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            heavy_rain_mm: 10.0,
            flood_rain_mm: 5.0,
            flood_district: "Sylhet".into(),
            cyclone_wind_kmh: 50.0,
            heat_stress_index: 40.0,
            lightning_probability: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GuidanceThresholds {
    pub worker_unsafe_heat_index: f64,
    pub worker_caution_heat_index: f64,
    pub unsafe_lightning_risk: f64,
    pub storm_lightning_risk: f64,
    pub calm_lightning_risk: f64,
    pub spraying_max_rain: f64,
    pub spraying_max_wind_kmh: f64,
    pub crop_high_rain: f64,
    pub crop_medium_rain: f64,
    pub tip_rain: f64,
    pub tip_heat_index: f64,
    pub risky_hour_rain: f64,
    pub study_comfort_heat_index: f64,
    pub confidence_high_below: f64,
    pub confidence_medium_below: f64,
    pub explain_heat_index: f64,
    pub explain_rain: f64,
    pub explain_wind_kmh: f64,
    pub explain_lightning: f64,
}

impl Default for GuidanceThresholds {
    fn default() -> Self {
        Self {
            worker_unsafe_heat_index: 41.0,
            worker_caution_heat_index: 35.0,
            unsafe_lightning_risk: 0.6,
            storm_lightning_risk: 0.8,
            calm_lightning_risk: 0.1,
            spraying_max_rain: 0.3,
            spraying_max_wind_kmh: 10.0,
            crop_high_rain: 0.6,
            crop_medium_rain: 0.3,
            tip_rain: 0.6,
            tip_heat_index: 38.0,
            risky_hour_rain: 0.6,
            study_comfort_heat_index: 35.0,
            confidence_high_below: 0.3,
            confidence_medium_below: 0.6,
            explain_heat_index: 35.0,
            explain_rain: 0.3,
            explain_wind_kmh: 10.0,
            explain_lightning: 0.6,
        }
    }
}
