//! Template contexts. Dates and clock times are preformatted here so the
//! templates stay logic-free.

use askama::Template;
use chrono::{DateTime, Duration, Local, Utc};
use weather_core::{Category, Comparison, UnitSystem, WeatherReading, compare};

/// Current date the way the pages display it, e.g. "Monday, August 03, 2026".
fn display_date() -> String {
    Local::now().format("%A, %B %d, %Y").to_string()
}

fn clock_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub min_date: String,
    pub max_date: String,
}

impl HomeTemplate {
    /// Date range shown on the historical form: today minus 5 days, through today.
    pub fn for_today() -> Self {
        let now = Local::now();
        Self {
            min_date: (now - Duration::days(5)).format("%Y-%m-%d").to_string(),
            max_date: now.format("%Y-%m-%d").to_string(),
        }
    }
}

/// One city's display block, shared by the results and comparison pages.
pub struct CityConditions {
    pub city: String,
    pub description: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub sunrise: String,
    pub sunset: String,
    pub icon_url: String,
}

impl CityConditions {
    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            city: reading.city.clone(),
            description: reading.description.clone(),
            temperature: reading.temperature,
            humidity: reading.humidity,
            wind_speed: reading.wind_speed,
            sunrise: clock_time(reading.sunrise),
            sunset: clock_time(reading.sunset),
            icon_url: reading.icon_url(),
        }
    }
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub date: String,
    pub units_letter: char,
    pub conditions: CityConditions,
}

impl ResultsTemplate {
    pub fn new(reading: &WeatherReading, units: UnitSystem) -> Self {
        Self {
            date: display_date(),
            units_letter: units.label(),
            conditions: CityConditions::from_reading(reading),
        }
    }
}

#[derive(Template)]
#[template(path = "comparison_results.html")]
pub struct ComparisonTemplate {
    pub date: String,
    pub units_letter: char,
    pub city1: CityConditions,
    pub city2: CityConditions,
    pub temperature: Comparison,
    pub humidity: Comparison,
    pub wind: Comparison,
    pub sunset: Comparison,
}

impl ComparisonTemplate {
    /// Sunsets are compared on the raw Unix timestamps, not local clock times.
    pub fn new(reading1: &WeatherReading, reading2: &WeatherReading, units: UnitSystem) -> Self {
        Self {
            date: display_date(),
            units_letter: units.label(),
            temperature: compare(
                reading1.temperature,
                reading2.temperature,
                Category::Temperature,
            ),
            humidity: compare(
                f64::from(reading1.humidity),
                f64::from(reading2.humidity),
                Category::Humidity,
            ),
            wind: compare(reading1.wind_speed, reading2.wind_speed, Category::WindSpeed),
            sunset: compare(
                reading1.sunset.timestamp() as f64,
                reading2.sunset.timestamp() as f64,
                Category::SunsetTime,
            ),
            city1: CityConditions::from_reading(reading1),
            city2: CityConditions::from_reading(reading2),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: &'static str,
    pub message: String,
}
