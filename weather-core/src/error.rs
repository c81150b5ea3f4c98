use thiserror::Error;

/// Failures while fetching or decoding weather data.
///
/// Nothing is retried; callers surface these as distinct error pages.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The upstream API could not resolve the requested city.
    #[error("city not found: {0}")]
    NotFound(String),

    /// Transport failure or an unexpected upstream status.
    #[error("weather API request failed: {0}")]
    Upstream(String),

    /// The response arrived but did not match the expected schema.
    #[error("could not decode weather API response: {0}")]
    MalformedResponse(String),
}
