use super::insight::{Confidence, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ALERT_SOURCE: &str = "BMD Intelligence";

/// A time-bounded push notification derived from a high-severity insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: Severity,
    pub confidence: Confidence,
    pub title: Option<String>,
    pub bn_title: Option<String>,
    pub details: String,
    pub bn_details: String,
    pub actions: Vec<String>,
    pub bn_actions: Vec<String>,
    pub source: String,
    pub valid_until: DateTime<Utc>,
}
