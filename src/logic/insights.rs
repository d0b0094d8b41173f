use crate::models::{
    Confidence, Insight, Mode, Rationale, Severity, Signal, SignalKind, INSIGHT_TYPE,
};

const ACTION_PREFIX_BN: &str = "অ্যাকশন: ";

/// Presentation copy for one signal kind
struct Template {
    summary: String,
    bn_summary: String,
    rationale: Rationale,
    actions: &'static [&'static str],
}

fn template_for(signal: &Signal) -> Option<Template> {
    match signal.kind {
        SignalKind::HeavyRain => Some(Template {
            summary: format!("Heavy rainfall ({:.1}mm) expected.", signal.value),
            bn_summary: format!("ভারী বৃষ্টিপাত ({:.1}মিমি) হতে পারে।", signal.value),
            rationale: Rationale::new(
                "Precipitation Spike",
                "Next 3h",
                "বৃষ্টির পরিমাণ বৃদ্ধি",
            ),
            actions: &["Avoid waterlogged areas", "Plan travel carefully"],
        }),
        SignalKind::FloodRisk => Some(Template {
            summary: "Immediate Flood Risk - High Alert".into(),
            bn_summary: "তাৎক্ষণিক বন্যার ঝুঁকি - উচ্চ সতর্কতা".into(),
            rationale: Rationale::new(
                "Continuous Heavy Rainfall",
                "Next 12h",
                "টানা ভারী বৃষ্টি",
            ),
            actions: &["Move valuables to high ground", "Keep emergency kits ready"],
        }),
        SignalKind::HeatStress => Some(Template {
            summary: format!("Excessive Heat Index: {:.1}", signal.value),
            bn_summary: format!("অত্যাধিক তাপ অনুভূত হচ্ছে: {:.1}", signal.value),
            rationale: Rationale::new(
                "High Temp + Humidity",
                "Daylight hours",
                "উচ্চ তাপমাত্রা ও আর্দ্রতা",
            ),
            actions: &["Drink oral saline", "Avoid sun exposure 11am-4pm"],
        }),
        // TODO: cyclone and lightning need reviewed bilingual copy before they get templates
        SignalKind::Cyclone | SignalKind::Lightning => None,
    }
}

/// Mode-specific actions appended after the template's own
fn personal_actions(mode: Mode, kind: SignalKind) -> &'static [&'static str] {
    match (mode, kind) {
        (Mode::Student, _) => &["Protect your school books from moisture."],
        (Mode::Farmer, SignalKind::HeavyRain) => &["Check field drainage immediately."],
        (Mode::Farmer, SignalKind::HeatStress) => &["Irrigate crops early morning."],
        _ => &[],
    }
}

/// Localized counterpart of each action, one per entry
pub fn localize_actions(actions: &[String]) -> Vec<String> {
    actions
        .iter()
        .map(|a| format!("{}{}", ACTION_PREFIX_BN, a))
        .collect()
}

/// The single insight shown when nothing hazardous was detected
pub fn calm_insight() -> Insight {
    Insight {
        insight_type: INSIGHT_TYPE.to_string(),
        severity: Severity::Normal,
        summary: Some("Weather is stable for now.".into()),
        bn_summary: Some("আবহাওয়া বর্তমানে স্থিতিশীল।".into()),
        rationale: Some(Rationale::new(
            "Seasonal Norm",
            "Next 6h",
            "স্বাভাবিক অবস্থা",
        )),
        confidence: Confidence::High,
        actions: vec![
            "Stay hydrated".into(),
            "Carry light umbrella if walking".into(),
        ],
        bn_actions: vec![
            "পর্যাপ্ত পানি পান করুন".into(),
            "বাইরে যাওয়ার সময় ছোট ছাতা রাখুন".into(),
        ],
        who_is_affected: "General residents".into(),
        bn_who_is_affected: "সাধারণ বাসিন্দা".into(),
    }
}

fn insight_for(signal: &Signal, mode: Mode, district: &str) -> Insight {
    let template = template_for(signal);

    let actions: Vec<String> = template
        .as_ref()
        .map(|t| t.actions)
        .unwrap_or_default()
        .iter()
        .chain(personal_actions(mode, signal.kind))
        .map(|a| a.to_string())
        .collect();
    let bn_actions = localize_actions(&actions);

    let (summary, bn_summary, rationale) = match template {
        Some(t) => (Some(t.summary), Some(t.bn_summary), Some(t.rationale)),
        None => {
            tracing::debug!(kind = %signal.kind, "No insight template for signal");
            (None, None, None)
        }
    };

    Insight {
        insight_type: INSIGHT_TYPE.to_string(),
        severity: signal.severity,
        summary,
        bn_summary,
        rationale,
        confidence: Confidence::for_severity(signal.severity),
        actions,
        bn_actions,
        who_is_affected: format!("Residents of {}", district),
        bn_who_is_affected: format!("{} অঞ্চলের বাসিন্দারা", district),
    }
}

/// Turn detected signals into insights, one per signal in input order, or a
/// single calm insight when there are none. Not ranked.
pub fn generate_insights(signals: &[Signal], mode: Mode, district: &str) -> Vec<Insight> {
    if signals.is_empty() {
        return vec![calm_insight()];
    }

    signals
        .iter()
        .map(|signal| insight_for(signal, mode, district))
        .collect()
}
