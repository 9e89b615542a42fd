//! Demo routes: greeting, health and a random weather forecast stub

use axum::{Extension, Json};
use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ForecastConfig;

const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub message: String,
    pub timestamp_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

/// Fahrenheit from Celsius, truncated toward zero.
#[allow(clippy::cast_possible_truncation)] // `as` saturates outside the i32 range
pub fn to_fahrenheit(temperature_c: i32) -> i32 {
    32 + (f64::from(temperature_c) / 0.5556) as i32
}

/// One entry per day starting the day after `today`.
pub fn generate_forecast<R: Rng>(
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<WeatherForecast> {
    (1..=days)
        .filter_map(|offset| today.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| {
            let temperature_c = rng.random_range(-20..55);
            WeatherForecast {
                date,
                temperature_c,
                temperature_f: to_fahrenheit(temperature_c),
                summary: SUMMARIES[rng.random_range(0..SUMMARIES.len())].to_owned(),
            }
        })
        .collect()
}

pub async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World from hello-server!".to_owned(),
        timestamp_utc: Utc::now(),
    })
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_owned(),
    })
}

pub async fn weather_forecast(
    Extension(cfg): Extension<ForecastConfig>,
) -> Json<Vec<WeatherForecast>> {
    let today = Utc::now().date_naive();
    Json(generate_forecast(cfg.days, today, &mut rand::rng()))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fahrenheit_conversion_truncates() {
        assert_eq!(to_fahrenheit(0), 32);
        assert_eq!(to_fahrenheit(100), 211);
        assert_eq!(to_fahrenheit(-20), -3);
        assert_eq!(to_fahrenheit(37), 98);
    }

    #[test]
    fn forecast_starts_tomorrow_and_stays_in_range() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let forecast = generate_forecast(5, today, &mut rng);

        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast[0].date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(forecast[2].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        for entry in &forecast {
            assert!((-20..55).contains(&entry.temperature_c));
            assert_eq!(entry.temperature_f, to_fahrenheit(entry.temperature_c));
            assert!(SUMMARIES.contains(&entry.summary.as_str()));
        }
    }

    #[test]
    fn forecast_is_deterministic_for_a_seed() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = generate_forecast(3, today, &mut StdRng::seed_from_u64(42));
        let b = generate_forecast(3, today, &mut StdRng::seed_from_u64(42));
        let temps = |f: &[WeatherForecast]| f.iter().map(|e| e.temperature_c).collect::<Vec<_>>();
        assert_eq!(temps(&a), temps(&b));
    }

    #[test]
    fn forecast_serializes_with_camel_case_keys() {
        let entry = WeatherForecast {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            temperature_c: 21,
            temperature_f: to_fahrenheit(21),
            summary: "Mild".to_owned(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["temperatureC"], 21);
        assert_eq!(json["temperatureF"], 69);
        assert!(json.get("temperature_c").is_none());
    }
}
