//! Configuration management for the Crop Advisor service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CROP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Farming plan generator configuration
    pub plan_generator: PlanGeneratorConfig,

    /// Feature classifier configuration
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base URL
    pub api_endpoint: String,

    /// Weather API key; the weather lookup is disabled when empty
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanGeneratorConfig {
    /// Text generation endpoint
    pub api_endpoint: String,

    /// API key; plan generation is disabled when empty
    pub api_key: String,

    /// Model name sent with each request
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// When false the classifier serves only the fallback list
    pub enabled: bool,

    /// Cosmetic warm-up delay before the classifier reports ready
    pub warmup_ms: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CROP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::builder(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CROP_ prefix)
            .add_source(
                Environment::with_prefix("CROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Defaults only, without file or environment sources
    #[cfg(test)]
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder("development")?.build()?.try_deserialize()
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", "")?
            .set_default(
                "plan_generator.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta/models",
            )?
            .set_default("plan_generator.api_key", "")?
            .set_default("plan_generator.model", "gemini-1.5-flash")?
            .set_default("plan_generator.timeout_secs", 60)?
            .set_default("classifier.enabled", true)?
            .set_default("classifier.warmup_ms", 0)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
