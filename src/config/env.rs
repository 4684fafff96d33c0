// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::config::credentials::load_api_key;
use crate::errors::ScrapeError;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Default root of the Google Maps web service APIs
pub const DEFAULT_GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::load() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8002)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps API key (empty until resolved by `load`)
    pub google_maps_api_key: String,

    /// JSON key file consulted when the key is not in the environment
    pub api_key_file: PathBuf,

    /// Google Maps web service root, overridable for local mocks
    pub google_maps_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Does not touch the key file; see `load`
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8002".to_string())
                .parse()
                .unwrap_or(8002),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")
                .map(|k| k.trim().to_string())
                .unwrap_or_default(),

            api_key_file: env::var("API_KEY_FILE")
                .unwrap_or_else(|_| "API_KEY.txt".to_string())
                .into(),

            google_maps_base_url: env::var("GOOGLE_MAPS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_MAPS_BASE_URL.to_string()),
        }
    }

    /// Load configuration and resolve the API key
    /// DOCUMENTATION: Environment key wins; otherwise the key file is read.
    /// A missing or malformed key is fatal for both binaries.
    pub fn load() -> Result<Self, ScrapeError> {
        let mut config = Self::from_env();
        config.resolve_api_key()?;
        config.validate()?;
        Ok(config)
    }

    fn resolve_api_key(&mut self) -> Result<(), ScrapeError> {
        if self.google_maps_api_key.is_empty() {
            log::debug!("GOOGLE_MAPS_API_KEY not set, reading {}", self.api_key_file.display());
            self.google_maps_api_key = load_api_key(&self.api_key_file)?;
        }
        Ok(())
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.google_maps_api_key.is_empty() {
            return Err(ScrapeError::ConfigError(
                "Google Maps API key is required".to_string(),
            ));
        }

        if !self.google_maps_base_url.starts_with("http") {
            return Err(ScrapeError::ConfigError(format!(
                "GOOGLE_MAPS_BASE_URL is not an http(s) URL: {}",
                self.google_maps_base_url
            )));
        }

        Ok(())
    }
}
