//! Configuration management for the address book service
//!
//! Handles loading configuration from an optional TOML file and
//! environment variables, and provides validation for all settings.

use crate::AddressBookError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration structure for the address book service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AddressBookConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the listener to
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to serve the API on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Database configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_database_path() -> String {
    "./address_book.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AddressBookConfig {
    /// Load configuration from `address_book.toml` (if present) and
    /// `ADDRESS_BOOK_*` environment variables, then validate it.
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name("address_book").required(false))
            .add_source(
                Environment::with_prefix("ADDRESS_BOOK")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: AddressBookConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AddressBookError::config("Server port cannot be 0").into());
        }

        if self.database.path.is_empty() {
            return Err(AddressBookError::config("Database path cannot be empty").into());
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(AddressBookError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ))
            .into());
        }

        if !["pretty", "json"].contains(&self.logging.format.as_str()) {
            return Err(AddressBookError::config(format!(
                "Invalid log format '{}'. Must be 'pretty' or 'json'",
                self.logging.format
            ))
            .into());
        }

        Ok(())
    }
}
