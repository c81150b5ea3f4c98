use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable checked before the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Process-wide configuration, built once at startup and passed into handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key, sent as the `appid` query parameter.
    pub api_key: String,
}

impl Config {
    /// Load the API key from the environment, falling back to the config file.
    ///
    /// Example TOML:
    /// api_key = "..."
    pub fn load() -> Result<Self> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(Self { api_key: key });
            }
        }

        let path = Self::config_file_path()?;
        if !path.exists() {
            return Err(anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: set {API_KEY_ENV}, or put `api_key = \"...\"` in {}.",
                path.display()
            ));
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;

        if cfg.api_key.trim().is_empty() {
            return Err(anyhow!("`api_key` must not be empty"));
        }

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-web", "weather-web")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
