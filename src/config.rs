//! Configuration management for LibSys server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string. Never embedded in a config file; comes
    /// from the MONGODB_URI environment variable.
    pub url: String,
    /// Database name holding the users/books/borrowedBooks/admins collections
    pub database: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// MONGODB_URI is required; loading fails without it.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix LIBSYS_)
            .add_source(
                Environment::with_prefix("LIBSYS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Connection string is only ever taken from MONGODB_URI
            .set_override_option("database.url", env::var("MONGODB_URI").ok())?
            // Override listening port from PORT env var if present
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}
