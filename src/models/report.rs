use super::{Alert, Guidance, Insight, Mode, WeatherCondition, WeatherSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportLocation {
    pub district: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeReport {
    pub location: ReportLocation,
    pub current_weather: WeatherSnapshot,
    pub primary_insight: Option<Insight>,
    pub all_insights: Vec<Insight>,
    pub is_emergency: bool,
    /// "high" or "low"
    pub next_6_hours_risk: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertsReport {
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceWeather {
    pub temperature: f64,
    pub condition: WeatherCondition,
    pub heat_index: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceReport {
    pub location: ReportLocation,
    pub mode: Mode,
    pub decision: Guidance,
    pub current_weather: GuidanceWeather,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastHour {
    pub time: String,
    pub temp: String,
    pub cond: WeatherCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    #[serde(rename = "comparisonText")]
    pub comparison_text: String,
    #[serde(rename = "bn_comparisonText")]
    pub bn_comparison_text: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyBrief {
    pub text: String,
    pub bn_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub hourly: Vec<ForecastHour>,
    pub comparison: Option<Comparison>,
    pub weekly_brief: WeeklyBrief,
}
