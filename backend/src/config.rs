//! Configuration management for the Disaster Response Coordination Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with DRC_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Generative-text API configuration
    pub generation: GenerationConfig,

    /// Prediction endpoint configuration
    pub prediction: PredictionConfig,

    /// Alert simulation configuration
    #[serde(default)]
    pub alerts: AlertsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// API key; empty leaves the generator unconfigured
    #[serde(default)]
    pub api_key: String,

    /// Base URL of the Generative Language API
    pub api_endpoint: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens in a generated response
    pub max_output_tokens: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GenerationConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Location reported with every prediction
    pub location: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlertsConfig {
    /// Fixed seed for the delivery simulation; random per request when unset
    pub simulation_seed: Option<u64>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("DRC_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("generation.api_key", "")?
            .set_default(
                "generation.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("generation.model", "gemini-1.5-pro")?
            .set_default("generation.temperature", 0.2)?
            .set_default("generation.max_output_tokens", 500)?
            .set_default("generation.timeout_secs", 60)?
            .set_default("prediction.location", "Kerala")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DRC_ prefix)
            .add_source(
                Environment::with_prefix("DRC")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            generation: GenerationConfig::default(),
            prediction: PredictionConfig::default(),
            alerts: AlertsConfig::default(),
        }
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

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.2,
            max_output_tokens: 500,
            timeout_secs: 60,
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            location: "Kerala".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_loaded_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.generation.model, "gemini-1.5-pro");
        assert_eq!(config.generation.max_output_tokens, 500);
        assert_eq!(config.prediction.location, "Kerala");
        assert!(config.alerts.simulation_seed.is_none());
    }

    #[test]
    fn test_generation_configured_only_with_key() {
        let mut generation = GenerationConfig::default();
        assert!(!generation.is_configured());
        generation.api_key = "   ".to_string();
        assert!(!generation.is_configured());
        generation.api_key = "key-123".to_string();
        assert!(generation.is_configured());
    }
}
