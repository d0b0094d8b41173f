use super::thresholds::SignalThresholds;
use crate::models::{Severity, Signal, SignalKind, WeatherSnapshot};

/// Detect hazard signals in one snapshot.
///
/// Every check runs independently, so several signals can fire at once. The
/// result is in check order: heavy rain, flood risk, cyclone, heat stress,
/// lightning.
pub fn detect_signals(weather: &WeatherSnapshot, thresholds: &SignalThresholds) -> Vec<Signal> {
    let mut signals = Vec::new();

    let rainfall = weather.precipitation;
    if rainfall >= thresholds.heavy_rain_mm {
        signals.push(Signal::new(SignalKind::HeavyRain, Severity::High, rainfall));
    }

    // District heuristic for low-lying basins, not a hydrological model
    if rainfall > thresholds.flood_rain_mm
        && weather.district.contains(thresholds.flood_district.as_str())
    {
        signals.push(Signal::new(
            SignalKind::FloodRisk,
            Severity::Emergency,
            rainfall,
        ));
    }

    if weather.wind_speed >= thresholds.cyclone_wind_kmh {
        signals.push(Signal::new(
            SignalKind::Cyclone,
            Severity::Emergency,
            weather.wind_speed,
        ));
    }

    let heat_index = weather.heat_index();
    if heat_index >= thresholds.heat_stress_index {
        signals.push(Signal::new(
            SignalKind::HeatStress,
            Severity::High,
            heat_index,
        ));
    }

    if weather.condition.is_stormy() {
        signals.push(Signal::new(
            SignalKind::Lightning,
            Severity::High,
            thresholds.lightning_probability,
        ));
    }

    tracing::debug!(
        district = %weather.district,
        count = signals.len(),
        "Detected weather signals"
    );

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherCondition;

    fn snapshot(district: &str) -> WeatherSnapshot {
        WeatherSnapshot::new(district)
    }

    fn kinds(signals: &[Signal]) -> Vec<SignalKind> {
        signals.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn calm_weather_has_no_signals() {
        let signals = detect_signals(&snapshot("Dhaka"), &SignalThresholds::default());
        assert!(signals.is_empty());
    }

    #[test]
    fn heavy_rain_carries_precipitation_value() {
        let mut weather = snapshot("Dhaka");
        weather.precipitation = 10.0;

        let signals = detect_signals(&weather, &SignalThresholds::default());
        assert_eq!(kinds(&signals), vec![SignalKind::HeavyRain]);
        assert_eq!(signals[0].severity, Severity::High);
        assert_eq!(signals[0].value, 10.0);

        weather.precipitation = 9.99;
        assert!(detect_signals(&weather, &SignalThresholds::default()).is_empty());
    }

    #[test]
    fn flood_risk_only_in_flood_district() {
        let mut weather = snapshot("Sylhet");
        weather.precipitation = 6.0;
        let signals = detect_signals(&weather, &SignalThresholds::default());
        assert_eq!(kinds(&signals), vec![SignalKind::FloodRisk]);
        assert_eq!(signals[0].severity, Severity::Emergency);

        weather.district = "Dhaka".into();
        assert!(detect_signals(&weather, &SignalThresholds::default()).is_empty());

        // Exactly 5.0 mm/h does not trigger
        weather.district = "Sylhet".into();
        weather.precipitation = 5.0;
        assert!(detect_signals(&weather, &SignalThresholds::default()).is_empty());
    }

    #[test]
    fn cyclone_is_emergency() {
        let mut weather = snapshot("Khulna");
        weather.wind_speed = 50.0;
        let signals = detect_signals(&weather, &SignalThresholds::default());
        assert_eq!(kinds(&signals), vec![SignalKind::Cyclone]);
        assert_eq!(signals[0].severity, Severity::Emergency);
        assert_eq!(signals[0].value, 50.0);
    }

    #[test]
    fn heat_stress_uses_heat_index() {
        let mut weather = snapshot("Rajshahi");
        weather.temperature = 33.0;
        weather.humidity = 70.0;
        let signals = detect_signals(&weather, &SignalThresholds::default());
        assert_eq!(kinds(&signals), vec![SignalKind::HeatStress]);
        assert_eq!(signals[0].value, 40.0);
    }

    #[test]
    fn storms_raise_lightning() {
        let mut weather = snapshot("Rangpur");
        weather.condition = WeatherCondition::Stormy;
        let signals = detect_signals(&weather, &SignalThresholds::default());
        assert_eq!(kinds(&signals), vec![SignalKind::Lightning]);
        assert_eq!(signals[0].value, 80.0);
    }

    #[test]
    fn signals_are_not_exclusive_and_keep_check_order() {
        let mut weather = snapshot("Sylhet");
        weather.precipitation = 25.0;
        weather.wind_speed = 80.0;
        weather.temperature = 36.0;
        weather.humidity = 90.0;
        weather.condition = WeatherCondition::Stormy;

        let signals = detect_signals(&weather, &SignalThresholds::default());
        assert_eq!(
            kinds(&signals),
            vec![
                SignalKind::HeavyRain,
                SignalKind::FloodRisk,
                SignalKind::Cyclone,
                SignalKind::HeatStress,
                SignalKind::Lightning,
            ]
        );
    }

    #[test]
    fn alternate_thresholds_are_honoured() {
        let thresholds = SignalThresholds {
            heavy_rain_mm: 3.0,
            ..Default::default()
        };
        let mut weather = snapshot("Dhaka");
        weather.precipitation = 4.0;
        let signals = detect_signals(&weather, &thresholds);
        assert_eq!(kinds(&signals), vec![SignalKind::HeavyRain]);
    }
}
