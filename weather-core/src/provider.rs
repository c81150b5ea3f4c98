use crate::{
    error::WeatherError,
    model::{WeatherRequest, WeatherReading},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current weather readings.
///
/// The site talks to one upstream API, but handlers only see this trait so
/// tests can substitute a canned source.
#[async_trait]
pub trait CurrentWeather: Send + Sync + Debug {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, WeatherError>;
}
