use serde::{Deserialize, Serialize};

pub const INSIGHT_TYPE: &str = "weather";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    High,
    Emergency,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::High => "high",
            Severity::Emergency => "emergency",
        }
    }

    /// Ranking weight; higher is shown first
    pub fn score(&self) -> u32 {
        match self {
            Severity::Emergency => 100,
            Severity::High => 50,
            Severity::Normal => 0,
        }
    }

    /// Whether an insight of this severity becomes an alert
    pub fn is_alerting(&self) -> bool {
        matches!(self, Severity::High | Severity::Emergency)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Extreme,
}

impl Confidence {
    pub fn for_severity(severity: Severity) -> Self {
        if severity == Severity::Emergency {
            Confidence::Extreme
        } else {
            Confidence::High
        }
    }
}

/// Why an insight was raised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rationale {
    pub trigger: String,
    pub time_window: String,
    pub bn_trigger: String,
}

impl Rationale {
    pub fn new(trigger: &str, time_window: &str, bn_trigger: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            time_window: time_window.to_string(),
            bn_trigger: bn_trigger.to_string(),
        }
    }
}

/// A user-facing weather insight with English and Bengali text.
///
/// `summary` and `why_this_alert` are absent for signal kinds that have no
/// presentation template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn_summary: Option<String>,
    #[serde(rename = "why_this_alert", skip_serializing_if = "Option::is_none")]
    pub rationale: Option<Rationale>,
    pub confidence: Confidence,
    pub actions: Vec<String>,
    pub bn_actions: Vec<String>,
    pub who_is_affected: String,
    pub bn_who_is_affected: String,
}
