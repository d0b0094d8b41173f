use crate::models::{Comparison, ForecastHour, ForecastReport, Trend, WeatherSnapshot, WeeklyBrief};

/// Hours listed in the forecast view
const FORECAST_HOURS: usize = 12;

/// Degrees of day-over-day change before the trend moves off "stable"
const TREND_BAND_C: f64 = 1.0;

fn hourly_view(weather: &WeatherSnapshot) -> Vec<ForecastHour> {
    let Some(series) = weather.hourly.as_ref() else {
        return Vec::new();
    };

    series
        .points(FORECAST_HOURS)
        .into_iter()
        .enumerate()
        .map(|(i, point)| ForecastHour {
            time: point.time,
            temp: format!("{:.1}°C", point.temperature),
            cond: series.condition_at(i),
        })
        .collect()
}

/// Compare today's max temperature against yesterday's
pub fn compare_with_yesterday(today_max: f64, yesterday_max: f64) -> Comparison {
    let diff = today_max - yesterday_max;
    let (warmer, bn_warmer) = if diff > 0.0 {
        ("warmer", "উষ্ণ")
    } else {
        ("cooler", "শীতল")
    };

    let trend = if diff > TREND_BAND_C {
        Trend::Up
    } else if diff < -TREND_BAND_C {
        Trend::Down
    } else {
        Trend::Stable
    };

    Comparison {
        comparison_text: format!(
            "Today is {:.1}°C {} than yesterday.",
            diff.abs(),
            warmer
        ),
        bn_comparison_text: format!(
            "আজ গতকালের চেয়ে {:.1}°সে. {}।",
            diff.abs(),
            bn_warmer
        ),
        trend,
    }
}

fn weekly_brief() -> WeeklyBrief {
    WeeklyBrief {
        text: "Stability expected throughout the week.".into(),
        bn_text: "পুরো সপ্তাহে স্থায়িত্ব আশা করা হচ্ছে।".into(),
    }
}

pub fn build_forecast(weather: &WeatherSnapshot) -> ForecastReport {
    let comparison = weather.observed_date().and_then(|today| {
        let daily = weather.daily.as_ref()?;
        let today_max = daily.max_temperature_on(today)?;
        let yesterday_max = daily.max_temperature_before(today)?;
        Some(compare_with_yesterday(today_max, yesterday_max))
    });

    ForecastReport {
        hourly: hourly_view(weather),
        comparison,
        weekly_brief: weekly_brief(),
    }
}
