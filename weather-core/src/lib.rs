//! Core library for the city weather site.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and its typed response schema
//! - Shared domain models (unit systems, requests, readings)
//! - The city-to-city comparison engine
//!
//! It is used by `weather-web`, but can also be reused by other binaries or services.

pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use compare::{Category, Comparison, compare};
pub use config::Config;
pub use error::WeatherError;
pub use model::{UnitSystem, WeatherReading, WeatherRequest};
pub use provider::{CurrentWeather, OpenWeatherProvider};
