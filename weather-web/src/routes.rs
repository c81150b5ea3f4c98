use askama::Template;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use weather_core::{CurrentWeather, UnitSystem, WeatherError, WeatherRequest};

use crate::views::{ComparisonTemplate, ErrorTemplate, HomeTemplate, ResultsTemplate};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CurrentWeather>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/results", get(results))
        .route("/comparison_results", get(comparison_results))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ResultsQuery {
    city: Option<String>,
    units: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ComparisonQuery {
    city1: Option<String>,
    city2: Option<String>,
    units: Option<String>,
}

async fn home() -> Result<Html<String>, AppError> {
    render(&HomeTemplate::for_today())
}

async fn results(
    State(state): State<AppState>,
    Query(params): Query<ResultsQuery>,
) -> Result<Html<String>, AppError> {
    let city = require_city(params.city, "city")?;
    let units = UnitSystem::from_param(params.units.as_deref());

    let reading = state
        .provider
        .current_weather(&WeatherRequest { city, units })
        .await?;

    render(&ResultsTemplate::new(&reading, units))
}

async fn comparison_results(
    State(state): State<AppState>,
    Query(params): Query<ComparisonQuery>,
) -> Result<Html<String>, AppError> {
    let city1 = require_city(params.city1, "city1")?;
    let city2 = require_city(params.city2, "city2")?;
    let units = UnitSystem::from_param(params.units.as_deref());

    // Two sequential fetches; the first failure wins.
    let reading1 = state
        .provider
        .current_weather(&WeatherRequest { city: city1, units })
        .await?;
    let reading2 = state
        .provider
        .current_weather(&WeatherRequest { city: city2, units })
        .await?;

    render(&ComparisonTemplate::new(&reading1, &reading2, units))
}

/// Reject absent or blank city parameters before any upstream call is made.
fn require_city(value: Option<String>, param: &'static str) -> Result<String, AppError> {
    match value {
        Some(city) if !city.trim().is_empty() => Ok(city),
        _ => Err(AppError::BadRequest(format!(
            "query parameter `{param}` must name a city"
        ))),
    }
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Weather(WeatherError),
    Render(askama::Error),
}

impl From<WeatherError> for AppError {
    fn from(err: WeatherError) -> Self {
        AppError::Weather(err)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, "Bad request", message),
            AppError::Weather(WeatherError::NotFound(city)) => (
                StatusCode::NOT_FOUND,
                "City not found",
                format!("No weather data for \"{city}\". Check the spelling and try again."),
            ),
            AppError::Weather(err @ WeatherError::Upstream(_)) => (
                StatusCode::BAD_GATEWAY,
                "Weather service unavailable",
                err.to_string(),
            ),
            AppError::Weather(err @ WeatherError::MalformedResponse(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unexpected weather data",
                err.to_string(),
            ),
            AppError::Render(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Page rendering failed",
                err.to_string(),
            ),
        };

        error!(%status, "{message}");

        let page = ErrorTemplate {
            title,
            message: message.clone(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}
