use serde::{Deserialize, Serialize};

/// Audience a guidance decision is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    General,
    Student,
    Farmer,
    Worker,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::General, Mode::Student, Mode::Farmer, Mode::Worker];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Some(Mode::General),
            "student" => Some(Mode::Student),
            "farmer" => Some(Mode::Farmer),
            "worker" => Some(Mode::Worker),
            _ => None,
        }
    }

    /// Resolve a requested mode name. Unrecognized names map to General.
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::debug!("Unrecognized mode {:?}, falling back to general", s);
            Mode::General
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::General => "general",
            Mode::Student => "student",
            Mode::Farmer => "farmer",
            Mode::Worker => "worker",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metrics the guidance rules read, derived once per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    pub temperature: f64,
    pub humidity: f64,
    /// 0.0-1.0
    pub rain_probability: f64,
    pub wind_speed: f64,
    pub heat_index: f64,
    /// 0.0-1.0
    pub lightning_risk: f64,
    /// 0.0-1.0, lower is more stable
    pub forecast_stability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ForecastConfidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkStatus {
    Safe,
    Caution,
    Unsafe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprayingSuitability {
    #[serde(rename = "SUITABLE")]
    Suitable,
    #[serde(rename = "NOT SUITABLE")]
    NotSuitable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CropRisk {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SixHourRisk {
    Risky,
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StudyComfort {
    Good,
    Poor,
}

/// The inputs a mode exposes for its explanation. Only present keys are
/// checked against the explanation thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Triggers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightning_risk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerDecision {
    pub status: WorkStatus,
    pub unsafe_hours: Vec<String>,
    pub advice: String,
    pub confidence: ForecastConfidence,
    pub notify_when_safe: bool,
    pub triggers: Triggers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerDecision {
    pub risk_level: CropRisk,
    pub spraying_suitable: SprayingSuitability,
    pub safe_window: String,
    pub advice: String,
    pub confidence: ForecastConfidence,
    pub triggers: Triggers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralDecision {
    pub key_tip: String,
    pub next_6h_risk: SixHourRisk,
    pub advice: String,
    pub confidence: ForecastConfidence,
    pub triggers: Triggers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDecision {
    #[serde(flatten)]
    pub general: GeneralDecision,
    pub study_comfort: StudyComfort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decision {
    General(GeneralDecision),
    Student(StudentDecision),
    Farmer(FarmerDecision),
    Worker(WorkerDecision),
}

impl Decision {
    pub fn triggers(&self) -> &Triggers {
        match self {
            Decision::General(d) => &d.triggers,
            Decision::Student(d) => &d.general.triggers,
            Decision::Farmer(d) => &d.triggers,
            Decision::Worker(d) => &d.triggers,
        }
    }

    pub fn confidence(&self) -> ForecastConfidence {
        match self {
            Decision::General(d) => d.confidence,
            Decision::Student(d) => d.general.confidence,
            Decision::Farmer(d) => d.confidence,
            Decision::Worker(d) => d.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyThisAdvice {
    pub triggers: Triggers,
    pub explanation: String,
    pub details: Vec<String>,
}

/// A mode decision with its explanation attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guidance {
    #[serde(flatten)]
    pub decision: Decision,
    pub why_this_advice: WhyThisAdvice,
}
