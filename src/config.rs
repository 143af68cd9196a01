//! Configuration management for the library server

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
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Output format of the tracing subscriber
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Database engine selected by the connection URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Sqlite,
    Postgres,
}

impl DatabaseBackend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(ConfigError::Message(format!(
                "Unsupported database URL scheme '{}'",
                other
            ))),
        }
    }
}

impl DatabaseConfig {
    pub fn backend(&self) -> Result<DatabaseBackend, ConfigError> {
        DatabaseBackend::from_url(&self.url)
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = AppConfig::default();

        let config = Config::builder()
            // Built-in defaults so the server starts without any file
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "database.min_connections",
                i64::from(defaults.database.min_connections),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LIBRARY_SERVER__PORT=9000 style overrides
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DB_URL").ok())?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.database.backend()?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://library.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
