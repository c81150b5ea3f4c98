use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL for OpenWeather condition icons.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Measurement convention governing both the API `units` parameter and the
/// display label. `Standard` (Kelvin) is what the API falls back to, so it is
/// also our default for absent or unrecognized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric,
    #[default]
    Standard,
}

impl UnitSystem {
    /// Total parse of a query-string value. Never fails.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("imperial") => UnitSystem::Imperial,
            Some("metric") => UnitSystem::Metric,
            _ => UnitSystem::Standard,
        }
    }

    /// Value of the `units` query parameter understood by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
            UnitSystem::Standard => "standard",
        }
    }

    /// One-letter temperature scale label for display.
    pub fn label(&self) -> char {
        match self {
            UnitSystem::Imperial => 'F',
            UnitSystem::Metric => 'C',
            UnitSystem::Standard => 'K',
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
    pub units: UnitSystem,
}

/// One city's weather snapshot at fetch time. Request-scoped; nothing is
/// persisted across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub description: String,
    pub temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub icon: String,
}

impl WeatherReading {
    /// URL of the `@2x` condition icon for this reading.
    pub fn icon_url(&self) -> String {
        format!("{ICON_BASE_URL}/{}@2x.png", self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_labels() {
        assert_eq!(UnitSystem::Imperial.label(), 'F');
        assert_eq!(UnitSystem::Metric.label(), 'C');
        assert_eq!(UnitSystem::Standard.label(), 'K');
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(UnitSystem::from_param(Some("imperial")), UnitSystem::Imperial);
        assert_eq!(UnitSystem::from_param(Some("metric")), UnitSystem::Metric);
        assert_eq!(UnitSystem::from_param(Some("")), UnitSystem::Standard);
        assert_eq!(UnitSystem::from_param(Some("xyz")), UnitSystem::Standard);
        assert_eq!(UnitSystem::from_param(None), UnitSystem::Standard);
    }

    #[test]
    fn unrecognized_units_display_kelvin() {
        assert_eq!(UnitSystem::from_param(Some("xyz")).label(), 'K');
        assert_eq!(UnitSystem::from_param(Some("")).label(), 'K');
    }

    #[test]
    fn icon_url_appends_id_and_suffix() {
        let reading = WeatherReading {
            city: "Paris".to_string(),
            description: "clear sky".to_string(),
            temperature: 21.0,
            humidity: 40,
            wind_speed: 3.2,
            sunrise: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            sunset: DateTime::from_timestamp(1_700_040_000, 0).unwrap(),
            icon: "01d".to_string(),
        };

        assert_eq!(reading.icon_url(), "https://openweathermap.org/img/wn/01d@2x.png");
    }
}
