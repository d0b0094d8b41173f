use super::alerts::project_alerts;
use super::forecast::build_forecast;
use super::guidance::{derive_input, GuidanceEngine};
use super::insights::generate_insights;
use super::ranking::rank_insights;
use super::signals::detect_signals;
use super::thresholds::Thresholds;
use crate::datasources::WeatherSource;
use crate::models::{
    AlertsReport, Division, ForecastReport, GuidanceReport, GuidanceWeather, HomeReport, Insight,
    Mode, ReportLocation, Severity, Signal, WeatherSnapshot,
};
use chrono::{DateTime, Utc};

/// Builds every report surface from one weather source.
///
/// A failed fetch never produces a partial report: the home, guidance and
/// forecast surfaces come back as `None` and alerts come back empty.
pub struct ReportService {
    source: Box<dyn WeatherSource>,
    thresholds: Thresholds,
    guidance: GuidanceEngine,
}

impl ReportService {
    pub fn new(source: Box<dyn WeatherSource>, thresholds: Thresholds) -> Self {
        tracing::info!("Using {} for weather data", source.name());
        let guidance = GuidanceEngine::new(thresholds.guidance.clone());
        Self {
            source,
            thresholds,
            guidance,
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn guidance_rules(&self) -> Vec<(Mode, &'static str)> {
        self.guidance.list_rules()
    }

    pub async fn check_connection(&self) -> bool {
        match self.source.test_connection().await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!("{} connection check failed: {}", self.source.name(), e);
                false
            }
        }
    }

    /// Known divisions are reported under their canonical name; anything
    /// else keeps the name as requested.
    async fn fetch(&self, district: &str) -> Option<WeatherSnapshot> {
        let division = Division::lookup(district);
        let district = if Division::is_known(district) {
            division.name
        } else {
            district
        };

        let mut snapshot = match self.source.fetch(division, district).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Weather data unavailable for {}: {}", district, e);
                return None;
            }
        };

        if snapshot.district != district {
            if !snapshot.district.is_empty() {
                tracing::warn!(
                    "{} returned weather for {}, reporting it as {}",
                    self.source.name(),
                    snapshot.district,
                    district
                );
            }
            snapshot.district = district.to_string();
        }

        Some(snapshot)
    }

    /// Detected signals and the ranked, visible insights for them
    pub fn insights(&self, weather: &WeatherSnapshot, mode: Mode) -> (Vec<Signal>, Vec<Insight>) {
        let signals = detect_signals(weather, &self.thresholds.signals);
        let insights = rank_insights(generate_insights(&signals, mode, &weather.district));
        (signals, insights)
    }

    pub fn home_report(&self, weather: WeatherSnapshot, mode: Mode) -> HomeReport {
        let (signals, insights) = self.insights(&weather, mode);

        let is_emergency = insights.iter().any(|i| i.severity == Severity::Emergency);
        let any_high = signals.iter().any(|s| s.severity == Severity::High);
        let next_6_hours_risk = if is_emergency || any_high { "high" } else { "low" };

        HomeReport {
            location: ReportLocation {
                district: weather.district.clone(),
                division: Some(weather.district.clone()),
            },
            primary_insight: insights.first().cloned(),
            all_insights: insights,
            is_emergency,
            next_6_hours_risk: next_6_hours_risk.to_string(),
            current_weather: weather,
        }
    }

    pub fn alerts_report(&self, weather: &WeatherSnapshot, mode: Mode, now: DateTime<Utc>) -> AlertsReport {
        let (_, insights) = self.insights(weather, mode);
        AlertsReport {
            alerts: project_alerts(&insights, now),
        }
    }

    pub fn guidance_report(&self, weather: &WeatherSnapshot, mode: Mode) -> GuidanceReport {
        let hourly = weather.hourly_points();
        let input = derive_input(weather, &hourly, &self.thresholds.guidance);
        let decision = self.guidance.evaluate(mode, &input, &hourly);

        GuidanceReport {
            location: ReportLocation {
                district: weather.district.clone(),
                division: None,
            },
            mode,
            decision,
            current_weather: GuidanceWeather {
                temperature: weather.temperature,
                condition: weather.condition,
                heat_index: input.heat_index,
                humidity: weather.humidity,
            },
        }
    }

    pub async fn home(&self, district: &str, mode: Mode) -> Option<HomeReport> {
        let weather = self.fetch(district).await?;
        Some(self.home_report(weather, mode))
    }

    pub async fn alerts(&self, district: &str, mode: Mode, now: DateTime<Utc>) -> AlertsReport {
        match self.fetch(district).await {
            Some(weather) => self.alerts_report(&weather, mode, now),
            None => AlertsReport::default(),
        }
    }

    pub async fn guidance(&self, district: &str, mode: Mode) -> Option<GuidanceReport> {
        let weather = self.fetch(district).await?;
        Some(self.guidance_report(&weather, mode))
    }

    pub async fn forecast(&self, district: &str) -> Option<ForecastReport> {
        let weather = self.fetch(district).await?;
        Some(build_forecast(&weather))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SkyGuideError};
    use crate::models::{Decision, HourlySeries, WeatherCondition};
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct StubSource(Option<WeatherSnapshot>);

    /// Serves a fixed snapshot without touching its district
    struct FixedSource(WeatherSnapshot);

    #[async_trait]
    impl WeatherSource for FixedSource {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        async fn fetch(&self, _division: &Division, _district: &str) -> Result<WeatherSnapshot> {
            Ok(self.0.clone())
        }

        async fn test_connection(&self) -> Result<bool> {
            Ok(true)
        }
    }

    #[async_trait]
    impl WeatherSource for StubSource {
        fn name(&self) -> &'static str {
            "Stub"
        }

        async fn fetch(&self, _division: &Division, district: &str) -> Result<WeatherSnapshot> {
            let mut snapshot = self
                .0
                .clone()
                .ok_or_else(|| SkyGuideError::DataSourceUnavailable("stub offline".into()))?;
            snapshot.district = district.to_string();
            Ok(snapshot)
        }

        async fn test_connection(&self) -> Result<bool> {
            Ok(self.0.is_some())
        }
    }

    fn service(snapshot: Option<WeatherSnapshot>) -> ReportService {
        ReportService::new(Box::new(StubSource(snapshot)), Thresholds::default())
    }

    fn monsoon_storm() -> WeatherSnapshot {
        let mut weather = WeatherSnapshot::new("Sylhet");
        weather.temperature = 31.0;
        weather.humidity = 90.0;
        weather.precipitation = 14.0;
        weather.wind_speed = 20.0;
        weather.condition = WeatherCondition::Stormy;
        weather.hourly = Some(HourlySeries {
            time: (0..8).map(|h| format!("2024-06-01T{:02}:00", 12 + h)).collect(),
            temperature_2m: vec![31.0, 31.5, 32.0, 31.0, 30.0, 29.5, 29.0, 28.0],
            relative_humidity_2m: vec![90.0; 8],
            precipitation: vec![14.0, 9.0, 4.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            weathercode: vec![95; 8],
        });
        weather
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn home_report_ranks_emergency_first() {
        let report = service(Some(monsoon_storm()))
            .home("Sylhet", Mode::Farmer)
            .await
            .unwrap();

        assert!(report.is_emergency);
        assert_eq!(report.next_6_hours_risk, "high");
        assert_eq!(report.all_insights.len(), 3);
        let primary = report.primary_insight.unwrap();
        assert_eq!(primary.severity, Severity::Emergency);
        assert_eq!(
            primary.summary.as_deref(),
            Some("Immediate Flood Risk - High Alert")
        );
        assert_eq!(report.location.division.as_deref(), Some("Sylhet"));
    }

    #[tokio::test]
    async fn district_names_are_canonicalized() {
        let mut weather = WeatherSnapshot::new("");
        weather.precipitation = 6.0;

        let report = service(Some(weather))
            .home("  sylhet ", Mode::General)
            .await
            .unwrap();

        assert_eq!(report.location.district, "Sylhet");
        assert!(report.is_emergency);
        assert_eq!(
            report.primary_insight.unwrap().summary.as_deref(),
            Some("Immediate Flood Risk - High Alert")
        );
    }

    #[tokio::test]
    async fn unknown_district_keeps_requested_name() {
        let report = service(Some(WeatherSnapshot::new("")))
            .home("Cox's Bazar", Mode::General)
            .await
            .unwrap();
        assert_eq!(report.location.district, "Cox's Bazar");
    }

    #[tokio::test]
    async fn requested_district_wins_over_source_district() {
        let service = ReportService::new(Box::new(FixedSource(monsoon_storm())), Thresholds::default());

        let report = service.home("Dhaka", Mode::General).await.unwrap();
        assert_eq!(report.location.district, "Dhaka");
        assert_eq!(report.current_weather.district, "Dhaka");
        assert!(report
            .all_insights
            .iter()
            .all(|i| i.summary.as_deref() != Some("Immediate Flood Risk - High Alert")));
    }

    #[tokio::test]
    async fn calm_day_is_low_risk() {
        let report = service(Some(WeatherSnapshot::new("Dhaka")))
            .home("Dhaka", Mode::General)
            .await
            .unwrap();

        assert!(!report.is_emergency);
        assert_eq!(report.next_6_hours_risk, "low");
        assert_eq!(report.all_insights.len(), 1);
        assert_eq!(
            report.primary_insight.unwrap().severity,
            Severity::Normal
        );
    }

    #[tokio::test]
    async fn unavailable_source_yields_absent_results() {
        let service = service(None);
        assert!(service.home("Dhaka", Mode::General).await.is_none());
        assert!(service.guidance("Dhaka", Mode::Worker).await.is_none());
        assert!(service.forecast("Dhaka").await.is_none());
        assert!(service.alerts("Dhaka", Mode::General, now()).await.alerts.is_empty());
        assert!(!service.check_connection().await);
    }

    #[tokio::test]
    async fn alerts_are_capped_and_time_bounded() {
        let report = service(Some(monsoon_storm()))
            .alerts("Sylhet", Mode::Student, now())
            .await;

        assert_eq!(report.alerts.len(), 3);
        for alert in &report.alerts {
            assert!(alert.severity.is_alerting());
            assert_eq!(alert.valid_until, now() + chrono::Duration::hours(6));
            assert_eq!(alert.actions.len(), alert.bn_actions.len());
        }
    }

    #[tokio::test]
    async fn worker_guidance_uses_hourly_outlook() {
        let report = service(Some(monsoon_storm()))
            .guidance("Sylhet", Mode::Worker)
            .await
            .unwrap();

        assert_eq!(report.mode, Mode::Worker);
        assert_eq!(report.current_weather.heat_index, 40.0);
        match &report.decision.decision {
            Decision::Worker(d) => {
                // Storms push lightning risk over the line even below the heat limit
                assert_eq!(d.status, crate::models::WorkStatus::Unsafe);
                assert_eq!(d.unsafe_hours, vec!["14:00"]);
            }
            other => panic!("expected worker decision, got {:?}", other),
        }
        assert_eq!(
            report.decision.why_this_advice.details,
            vec![
                "Heat index is 40.0°C (unsafe threshold: 35°C)",
                "Lightning risk is 80%",
            ]
        );
    }

    #[tokio::test]
    async fn guidance_for_each_mode_serializes() {
        let service = service(Some(monsoon_storm()));
        for mode in Mode::ALL {
            let report = service.guidance("Sylhet", mode).await.unwrap();
            let value = serde_json::to_value(&report).unwrap();
            assert_eq!(value["mode"], mode.as_str());
            assert!(value["decision"]["why_this_advice"]["details"].is_array());
            assert!(value["decision"]["confidence"].is_string());
        }
    }
}
