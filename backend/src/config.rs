//! Configuration management for the Food Production Management Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FPM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Document store configuration
    pub store: StoreConfig,

    /// Supplier catalog configuration
    pub catalog: CatalogConfig,

    /// Audit defaults applied when completing a run without full data entry
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Store mode: "http" for the JSON document API, "memory" for development
    pub mode: String,

    /// Base URL of the JSON document store API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Directory holding per-department supplier CSV files
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuditConfig {
    /// Days added to the production date when no sell-by date was entered
    pub sell_by_days: i64,

    /// Quality score assumed when a run completes without one (1-5 scale)
    pub default_quality_score: i32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FPM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("store.mode", "memory")?
            .set_default("store.base_url", "http://localhost:4000")?
            .set_default("store.timeout_seconds", 30)?
            .set_default("catalog.dir", "data/suppliers")?
            .set_default("audit.sell_by_days", 7)?
            .set_default("audit.default_quality_score", 3)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FPM_ prefix)
            .add_source(
                Environment::with_prefix("FPM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            sell_by_days: 7,
            default_quality_score: 3,
        }
    }
}
