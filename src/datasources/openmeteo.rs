use super::WeatherSource;
use crate::config::OpenMeteoConfig;
use crate::error::{Result, SkyGuideError};
use crate::models::{
    DailySeries, Division, HourlySeries, WeatherCondition, WeatherSnapshot,
    DEFAULT_HUMIDITY_PERCENT, DEFAULT_TEMPERATURE_C,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// WMO code used when the hourly series has a gap
const UNKNOWN_WEATHER_CODE: i32 = -1;

pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: OpenMeteoConfig,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: OmCurrentWeather,
    #[serde(default)]
    hourly: Option<OmHourly>,
    #[serde(default)]
    daily: Option<OmDaily>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    time: String,
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Default, Deserialize)]
struct OmHourly {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
    #[serde(default)]
    weathercode: Vec<Option<i32>>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
}

/// Position of the current hour in the hourly timeline: exact match, then
/// same-hour match ("2024-06-01T14:15" -> "2024-06-01T14:00"), then 0.
fn current_hour_index(times: &[String], current: &str) -> usize {
    if let Some(i) = times.iter().position(|t| t == current) {
        return i;
    }

    current
        .get(..13)
        .and_then(|hour| times.iter().position(|t| t.starts_with(hour)))
        .unwrap_or(0)
}

fn value_or<T: Copy>(values: &[Option<T>], index: usize, default: T) -> T {
    values.get(index).copied().flatten().unwrap_or(default)
}

impl OpenMeteoClient {
    pub fn new(config: OpenMeteoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn forecast_url(&self, division: &Division) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true\
             &hourly=temperature_2m,relative_humidity_2m,precipitation,weathercode\
             &daily=temperature_2m_max,temperature_2m_min&past_days=1&timezone=auto",
            self.config.base_url.trim_end_matches('/'),
            division.latitude,
            division.longitude
        )
    }

    /// Fetch current conditions and the hourly/daily outlook for a division
    pub async fn fetch_forecast(&self, division: &Division, district: &str) -> Result<WeatherSnapshot> {
        let url = self.forecast_url(division);
        tracing::debug!(%url, "Requesting Open-Meteo forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkyGuideError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SkyGuideError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let om_response: OmForecastResponse = response.json().await.map_err(|e| {
            SkyGuideError::DataSourceUnavailable(format!(
                "Failed to parse Open-Meteo response: {}",
                e
            ))
        })?;

        Ok(self.convert_response(om_response, district))
    }

    fn convert_response(&self, response: OmForecastResponse, district: &str) -> WeatherSnapshot {
        let current = response.current_weather;
        let hourly = response.hourly.unwrap_or_default();
        let index = current_hour_index(&hourly.time, &current.time);

        let humidity = value_or(&hourly.relative_humidity_2m, index, DEFAULT_HUMIDITY_PERCENT);
        let precipitation = value_or(&hourly.precipitation, index, 0.0);

        WeatherSnapshot {
            district: district.to_string(),
            observed_at: Some(current.time.clone()),
            temperature: current.temperature,
            condition: WeatherCondition::from_wmo_code(current.weathercode),
            humidity,
            precipitation,
            wind_speed: current.windspeed,
            hourly: Some(self.convert_hourly(&hourly, index)),
            daily: response.daily.map(|d| DailySeries {
                time: d.time,
                temperature_2m_max: d.temperature_2m_max,
                temperature_2m_min: d.temperature_2m_min,
            }),
        }
    }

    /// Hourly series starting at the current hour
    fn convert_hourly(&self, hourly: &OmHourly, start: usize) -> HourlySeries {
        let indices = start..hourly.time.len();

        HourlySeries {
            time: hourly.time.iter().skip(start).cloned().collect(),
            temperature_2m: indices
                .clone()
                .map(|i| value_or(&hourly.temperature_2m, i, DEFAULT_TEMPERATURE_C))
                .collect(),
            relative_humidity_2m: indices
                .clone()
                .map(|i| value_or(&hourly.relative_humidity_2m, i, DEFAULT_HUMIDITY_PERCENT))
                .collect(),
            precipitation: indices
                .clone()
                .map(|i| value_or(&hourly.precipitation, i, 0.0))
                .collect(),
            weathercode: indices
                .map(|i| value_or(&hourly.weathercode, i, UNKNOWN_WEATHER_CODE))
                .collect(),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    fn name(&self) -> &'static str {
        "Open-Meteo"
    }

    async fn fetch(&self, division: &Division, district: &str) -> Result<WeatherSnapshot> {
        self.fetch_forecast(division, district).await
    }

    async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true",
            self.config.base_url.trim_end_matches('/'),
            Division::lookup("Dhaka").latitude,
            Division::lookup("Dhaka").longitude
        );

        let response =
            self.client.get(&url).send().await.map_err(|e| {
                SkyGuideError::DataSourceUnavailable(format!("Open-Meteo: {}", e))
            })?;

        Ok(response.status().is_success())
    }
}
