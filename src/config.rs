//! Client configuration
//!
//! Loads an immutable [`Config`] from `~/.medassyst/config.toml` (created
//! with defaults on first run). The `MEDASSYST_API_URL` environment variable
//! overrides the configured base URL. The loaded value is passed into the
//! composition root once; nothing mutates it afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend base URL when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Fixed external diagnosis-proxy URL the backend forwards to
pub const EXTERNAL_API_URL: &str = "https://begdulla.uz/APII/api.php";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    /// Answer diagnosis/history requests from canned data without a backend
    #[serde(default)]
    pub demo_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL
    pub base_url: String,

    /// Retry attempts after the initial call before failing
    pub max_retries: u32,

    /// Base retry delay in milliseconds (grows linearly per retry)
    pub retry_delay_ms: u64,

    /// Per-attempt transport timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            max_retries: 3,
            retry_delay_ms: 1000,
            // The upstream diagnosis proxy can be very slow
            timeout_secs: 120,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig::default(),
            demo_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;

            toml::from_str(&contents)
                .context("Failed to parse config file")?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        if let Ok(url) = std::env::var("MEDASSYST_API_URL") {
            if !url.trim().is_empty() {
                config.api.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".medassyst").join("config.toml"))
    }

    /// Get the session file path (same directory as the config)
    pub fn session_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".medassyst").join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.max_retries, 3);
        assert_eq!(config.api.retry_delay_ms, 1000);
        assert_eq!(config.api.timeout_secs, 120);
        assert!(!config.demo_mode);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("localhost:8000"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.api.base_url, config.api.base_url);
        assert_eq!(deserialized.api.max_retries, 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("demo_mode = true").unwrap();
        assert!(config.demo_mode);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }
}
