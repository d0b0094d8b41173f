use crate::models::{Alert, Insight, ALERT_SOURCE};
use chrono::{DateTime, Duration, Utc};

/// How long an alert stays valid after it is issued
pub const ALERT_VALIDITY_HOURS: i64 = 6;

/// Capitalize the first letter: "weather" -> "Weather"
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn details(who: &str, trigger: Option<&str>) -> String {
    match trigger {
        Some(trigger) => format!("{}: {}", who, trigger),
        None => who.to_string(),
    }
}

/// Project high and emergency insights into alerts issued at `now`.
///
/// Insight order is preserved; normal insights are dropped.
pub fn project_alerts(insights: &[Insight], now: DateTime<Utc>) -> Vec<Alert> {
    let valid_until = now + Duration::hours(ALERT_VALIDITY_HOURS);

    insights
        .iter()
        .filter(|insight| insight.severity.is_alerting())
        .map(|insight| {
            let rationale = insight.rationale.as_ref();
            Alert {
                alert_type: capitalize(&insight.insight_type),
                severity: insight.severity,
                confidence: insight.confidence,
                title: insight.summary.clone(),
                bn_title: insight.bn_summary.clone(),
                details: details(
                    &insight.who_is_affected,
                    rationale.map(|r| r.trigger.as_str()),
                ),
                bn_details: details(
                    &insight.bn_who_is_affected,
                    rationale.map(|r| r.bn_trigger.as_str()),
                ),
                actions: insight.actions.clone(),
                bn_actions: insight.bn_actions.clone(),
                source: ALERT_SOURCE.to_string(),
                valid_until,
            }
        })
        .collect()
}
