use super::insight::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    HeavyRain,
    FloodRisk,
    Cyclone,
    HeatStress,
    Lightning,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::HeavyRain => "heavy_rain",
            SignalKind::FloodRisk => "flood_risk",
            SignalKind::Cyclone => "cyclone",
            SignalKind::HeatStress => "heat_stress",
            SignalKind::Lightning => "lightning",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A detected hazardous condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub severity: Severity,
    pub value: f64,
}

impl Signal {
    pub fn new(kind: SignalKind, severity: Severity, value: f64) -> Self {
        Self {
            kind,
            severity,
            value,
        }
    }
}
