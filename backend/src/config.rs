//! Configuration management for the FarmKonnect analytics backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FK_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::services::alert_dispatcher::AlertConfig;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Notification service configuration
    pub notifier: NotifierConfig,

    /// Realtime broadcast hub configuration
    pub realtime: RealtimeConfig,

    /// Alert threshold and channel configuration
    #[serde(default)]
    pub alerts: AlertConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotifierConfig {
    /// Notification service endpoint
    pub endpoint: String,

    /// Notification service API key
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RealtimeConfig {
    /// WebSocket hub broadcast endpoint
    pub endpoint: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FK_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("notifier.endpoint", "http://localhost:4000/notifications")?
            .set_default("notifier.api_key", "")?
            .set_default("realtime.endpoint", "http://localhost:4001/broadcast")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FK_ prefix)
            .add_source(
                Environment::with_prefix("FK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            host: "0.0.0.0".to_string(),
        }
    }
}
