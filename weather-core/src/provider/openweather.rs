use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{WeatherRequest, WeatherReading},
};

use super::CurrentWeather;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a non-default endpoint. Tests aim this at a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherReading, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        debug!(city = %request.city, units = %request.units, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("appid", self.api_key.as_str()),
                ("q", request.city.as_str()),
                ("units", request.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Upstream(format!("request to OpenWeather failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::Upstream(format!("failed to read response body: {e}")))?;

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(request.city.clone()));
        }

        if !status.is_success() {
            return Err(WeatherError::Upstream(format!(
                "OpenWeather returned status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        parsed.into_reading()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

impl OwCurrentResponse {
    fn into_reading(self) -> Result<WeatherReading, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::MalformedResponse("weather conditions array is empty".to_string())
        })?;

        Ok(WeatherReading {
            city: self.name,
            description: condition.description,
            temperature: self.main.temp,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            sunrise: unix_to_utc(self.sys.sunrise)?,
            sunset: unix_to_utc(self.sys.sunset)?,
            icon: condition.icon,
        })
    }
}

#[async_trait]
impl CurrentWeather for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, WeatherError> {
        self.fetch_current(request).await
    }
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, WeatherError> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| WeatherError::MalformedResponse(format!("timestamp {ts} is out of range")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
