use crate::logic::thresholds::GuidanceThresholds;
use crate::models::{Triggers, WhyThisAdvice};

const EXPLANATION: &str = "Advice generated based on safety thresholds";

/// Explain a decision from the triggers its mode exposes.
///
/// Each present trigger that crosses its threshold adds one line, in the
/// order heat, rain, wind, lightning. Absent triggers are never checked.
pub fn why_this_advice(triggers: &Triggers, thresholds: &GuidanceThresholds) -> WhyThisAdvice {
    let mut details = Vec::new();

    if let Some(heat_index) = triggers.heat_index {
        if heat_index >= thresholds.explain_heat_index {
            details.push(format!(
                "Heat index is {:.1}°C (unsafe threshold: {:.0}°C)",
                heat_index, thresholds.explain_heat_index
            ));
        }
    }

    if let Some(rain) = triggers.rain_probability {
        if rain > thresholds.explain_rain {
            details.push(format!("Rain probability is {:.0}%", rain * 100.0));
        }
    }

    if let Some(wind) = triggers.wind_speed {
        if wind > thresholds.explain_wind_kmh {
            details.push(format!(
                "Wind speed is {:.1} km/h (spraying limit: {:.0} km/h)",
                wind, thresholds.explain_wind_kmh
            ));
        }
    }

    if let Some(lightning) = triggers.lightning_risk {
        if lightning > thresholds.explain_lightning {
            details.push(format!("Lightning risk is {:.0}%", lightning * 100.0));
        }
    }

    WhyThisAdvice {
        triggers: triggers.clone(),
        explanation: EXPLANATION.to_string(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_crossed_threshold() {
        let triggers = Triggers {
            heat_index: Some(42.5),
            lightning_risk: Some(0.8),
            rain_probability: Some(0.45),
            wind_speed: Some(12.0),
        };
        let why = why_this_advice(&triggers, &GuidanceThresholds::default());
        assert_eq!(
            why.details,
            vec![
                "Heat index is 42.5°C (unsafe threshold: 35°C)",
                "Rain probability is 45%",
                "Wind speed is 12.0 km/h (spraying limit: 10 km/h)",
                "Lightning risk is 80%",
            ]
        );
        assert_eq!(why.explanation, EXPLANATION);
        assert_eq!(why.triggers, triggers);
    }

    #[test]
    fn absent_triggers_are_not_evaluated() {
        let triggers = Triggers {
            rain_probability: Some(0.1),
            wind_speed: Some(5.0),
            ..Default::default()
        };
        let why = why_this_advice(&triggers, &GuidanceThresholds::default());
        assert!(why.details.is_empty());
    }

    #[test]
    fn boundaries() {
        let t = GuidanceThresholds::default();
        let at_bounds = Triggers {
            heat_index: Some(35.0),
            lightning_risk: Some(0.6),
            rain_probability: Some(0.3),
            wind_speed: Some(10.0),
        };
        let why = why_this_advice(&at_bounds, &t);
        assert_eq!(why.details.len(), 1);
        assert!(why.details[0].starts_with("Heat index is 35.0°C"));
    }
}
