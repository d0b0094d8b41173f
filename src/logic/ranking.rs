use crate::models::Insight;
use std::cmp::Reverse;

/// Number of insights shown to the user
pub const VISIBLE_INSIGHTS: usize = 3;

/// Order insights by severity, most severe first, and keep the visible few.
///
/// The sort is stable: equal severities keep their input order.
pub fn rank_insights(mut insights: Vec<Insight>) -> Vec<Insight> {
    insights.sort_by_key(|insight| Reverse(insight.severity.score()));
    insights.truncate(VISIBLE_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::insights::generate_insights;
    use crate::models::{Mode, Severity, Signal, SignalKind};

    #[test]
    fn emergencies_rank_first() {
        let signals = vec![
            Signal::new(SignalKind::HeavyRain, Severity::High, 12.0),
            Signal::new(SignalKind::FloodRisk, Severity::Emergency, 12.0),
        ];
        let ranked = rank_insights(generate_insights(&signals, Mode::General, "Sylhet"));
        assert_eq!(ranked[0].severity, Severity::Emergency);
        assert_eq!(ranked[1].severity, Severity::High);
    }

    #[test]
    fn ties_keep_input_order() {
        let signals = vec![
            Signal::new(SignalKind::HeatStress, Severity::High, 41.0),
            Signal::new(SignalKind::HeavyRain, Severity::High, 11.0),
            Signal::new(SignalKind::Cyclone, Severity::Emergency, 55.0),
            Signal::new(SignalKind::Lightning, Severity::High, 80.0),
        ];
        let ranked = rank_insights(generate_insights(&signals, Mode::General, "Dhaka"));

        assert_eq!(ranked.len(), VISIBLE_INSIGHTS);
        assert_eq!(ranked[0].severity, Severity::Emergency);
        assert_eq!(
            ranked[1].summary.as_deref(),
            Some("Excessive Heat Index: 41.0")
        );
        assert_eq!(
            ranked[2].summary.as_deref(),
            Some("Heavy rainfall (11.0mm) expected.")
        );
    }

    #[test]
    fn short_lists_are_not_padded() {
        let ranked = rank_insights(generate_insights(&[], Mode::General, "Dhaka"));
        assert_eq!(ranked.len(), 1);
        assert!(rank_insights(Vec::new()).is_empty());
    }
}
