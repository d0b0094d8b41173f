use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 50.0;

/// Heat index proxy used across the app: temperature plus a tenth of humidity.
///
/// Not the meteorological heat index formula.
pub fn heat_index(temperature_c: f64, humidity_percent: f64) -> f64 {
    temperature_c + humidity_percent / 10.0
}

/// Rain probability proxy (0.0-1.0) from a precipitation rate in mm/h.
pub fn rain_probability(precipitation_mm: f64) -> f64 {
    (precipitation_mm / 10.0).min(1.0)
}

/// "2024-06-01T14:00" -> "14:00"
pub fn hour_label(timestamp: &str) -> String {
    let start = timestamp.len().saturating_sub(5);
    timestamp
        .get(start..)
        .unwrap_or(timestamp)
        .to_string()
}

/// Weather condition categories derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Foggy,
    Rainy,
    Snowy,
    Stormy,
    #[default]
    Variable,
}

impl WeatherCondition {
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => WeatherCondition::Clear,
            1..=3 => WeatherCondition::Cloudy,
            45 | 48 => WeatherCondition::Foggy,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => WeatherCondition::Rainy,
            71 | 73 | 75 | 85 | 86 => WeatherCondition::Snowy,
            95 | 96 | 99 => WeatherCondition::Stormy,
            _ => WeatherCondition::Variable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Snowy => "Snowy",
            WeatherCondition::Stormy => "Stormy",
            WeatherCondition::Variable => "Variable",
        }
    }

    /// Whether the condition label names a storm
    pub fn is_stormy(&self) -> bool {
        self.as_str().contains("Storm")
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw hourly series as delivered by the weather source.
///
/// Index 0 is the current hour; the vectors are parallel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<f64>,
    #[serde(default)]
    pub precipitation: Vec<f64>,
    #[serde(default)]
    pub weathercode: Vec<i32>,
}

impl HourlySeries {
    /// Derived forecast points for the first `limit` hours, in order
    pub fn points(&self, limit: usize) -> Vec<HourlyPoint> {
        self.time
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, time)| {
                let temperature = self
                    .temperature_2m
                    .get(i)
                    .copied()
                    .unwrap_or(DEFAULT_TEMPERATURE_C);
                let humidity = self
                    .relative_humidity_2m
                    .get(i)
                    .copied()
                    .unwrap_or(DEFAULT_HUMIDITY_PERCENT);
                let precipitation = self.precipitation.get(i).copied().unwrap_or(0.0);

                HourlyPoint {
                    time: hour_label(time),
                    temperature,
                    humidity,
                    rain_probability: rain_probability(precipitation),
                    heat_index: heat_index(temperature, humidity),
                }
            })
            .collect()
    }

    pub fn condition_at(&self, index: usize) -> WeatherCondition {
        self.weathercode
            .get(index)
            .map(|code| WeatherCondition::from_wmo_code(*code))
            .unwrap_or_default()
    }
}

/// Raw daily series. Entries may be null upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn max_temperature_on(&self, date: &str) -> Option<f64> {
        let index = self.time.iter().position(|d| d == date)?;
        self.temperature_2m_max.get(index).copied().flatten()
    }

    /// Max temperature for the day before `date`, if the series covers it
    pub fn max_temperature_before(&self, date: &str) -> Option<f64> {
        let index = self.time.iter().position(|d| d == date)?;
        let previous = index.checked_sub(1)?;
        self.temperature_2m_max.get(previous).copied().flatten()
    }
}

/// Current conditions for one district. Absent fields take fixed defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub district: String,
    /// Local observation time, e.g. "2024-06-01T14:00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub condition: WeatherCondition,
    #[serde(default = "default_humidity")]
    pub humidity: f64,
    #[serde(default)]
    pub precipitation: f64,
    #[serde(default, rename = "windspeed", alias = "wind_speed")]
    pub wind_speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<HourlySeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailySeries>,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE_C
}

fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY_PERCENT
}

impl WeatherSnapshot {
    pub fn new(district: impl Into<String>) -> Self {
        Self {
            district: district.into(),
            observed_at: None,
            temperature: DEFAULT_TEMPERATURE_C,
            condition: WeatherCondition::default(),
            humidity: DEFAULT_HUMIDITY_PERCENT,
            precipitation: 0.0,
            wind_speed: 0.0,
            hourly: None,
            daily: None,
        }
    }

    pub fn heat_index(&self) -> f64 {
        heat_index(self.temperature, self.humidity)
    }

    /// Hourly forecast points, up to 24, nearest hour first
    pub fn hourly_points(&self) -> Vec<HourlyPoint> {
        self.hourly
            .as_ref()
            .map(|h| h.points(24))
            .unwrap_or_default()
    }

    /// Today's date as "YYYY-MM-DD", taken from the observation time
    pub fn observed_date(&self) -> Option<&str> {
        self.observed_at.as_deref().and_then(|t| t.get(..10))
    }
}

/// One derived hourly forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub time: String,
    pub temperature: f64,
    pub humidity: f64,
    /// 0.0-1.0
    pub rain_probability: f64,
    pub heat_index: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_condition_from_wmo_code() {
        assert_eq!(WeatherCondition::from_wmo_code(0), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_wmo_code(2), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_wmo_code(48), WeatherCondition::Foggy);
        assert_eq!(WeatherCondition::from_wmo_code(81), WeatherCondition::Rainy);
        assert_eq!(WeatherCondition::from_wmo_code(86), WeatherCondition::Snowy);
        assert_eq!(WeatherCondition::from_wmo_code(96), WeatherCondition::Stormy);
        assert_eq!(WeatherCondition::from_wmo_code(4), WeatherCondition::Variable);
    }

    #[test]
    fn only_stormy_is_stormy() {
        assert!(WeatherCondition::Stormy.is_stormy());
        assert!(!WeatherCondition::Rainy.is_stormy());
        assert!(!WeatherCondition::Variable.is_stormy());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let snapshot: WeatherSnapshot = serde_json::from_str(r#"{"district": "Dhaka"}"#).unwrap();
        assert_eq!(snapshot.temperature, 20.0);
        assert_eq!(snapshot.humidity, 50.0);
        assert_eq!(snapshot.precipitation, 0.0);
        assert_eq!(snapshot.wind_speed, 0.0);
        assert_eq!(snapshot.condition, WeatherCondition::Variable);
        assert!(snapshot.hourly_points().is_empty());
    }

    #[test]
    fn accepts_windspeed_and_wind_speed() {
        let a: WeatherSnapshot = serde_json::from_str(r#"{"windspeed": 12.0}"#).unwrap();
        let b: WeatherSnapshot = serde_json::from_str(r#"{"wind_speed": 12.0}"#).unwrap();
        assert_eq!(a.wind_speed, 12.0);
        assert_eq!(b.wind_speed, 12.0);
    }

    #[test]
    fn hourly_points_derive_metrics_in_order() {
        let series = HourlySeries {
            time: vec!["2024-06-01T12:00".into(), "2024-06-01T13:00".into()],
            temperature_2m: vec![38.0, 39.0],
            relative_humidity_2m: vec![75.0, 80.0],
            precipitation: vec![2.0, 15.0],
            weathercode: vec![0, 95],
        };

        let points = series.points(24);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].time, "12:00");
        assert_eq!(points[0].heat_index, 45.5);
        assert!((points[0].rain_probability - 0.2).abs() < 1e-9);
        assert_eq!(points[1].time, "13:00");
        assert_eq!(points[1].rain_probability, 1.0);
        assert_eq!(series.condition_at(1), WeatherCondition::Stormy);
        assert_eq!(series.condition_at(7), WeatherCondition::Variable);
    }

    #[test]
    fn hour_label_handles_short_input() {
        assert_eq!(hour_label("2024-06-01T09:00"), "09:00");
        assert_eq!(hour_label("9:00"), "9:00");
    }

    #[test]
    fn daily_lookup_by_date() {
        let daily = DailySeries {
            time: vec!["2024-05-31".into(), "2024-06-01".into()],
            temperature_2m_max: vec![Some(33.0), Some(35.5)],
            temperature_2m_min: vec![Some(26.0), None],
        };
        assert_eq!(daily.max_temperature_on("2024-06-01"), Some(35.5));
        assert_eq!(daily.max_temperature_before("2024-06-01"), Some(33.0));
        assert_eq!(daily.max_temperature_before("2024-05-31"), None);
        assert_eq!(daily.max_temperature_on("2024-06-02"), None);
    }
}
