//! Binary crate for the city weather web site.
//!
//! This crate focuses on:
//! - HTTP routing and query parsing
//! - Building template contexts from core readings
//! - Mapping failures to user-visible error pages

mod routes;
mod views;

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use weather_core::{Config, OpenWeatherProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load()?;
    let provider = Arc::new(OpenWeatherProvider::new(config.api_key));

    let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let app = routes::router(routes::AppState { provider });

    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("Failed to bind to {http_addr}"))?;

    info!("listening on {http_addr}");
    axum::serve(listener, app).await.context("HTTP server error")?;

    Ok(())
}
