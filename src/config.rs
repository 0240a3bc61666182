//! Configuration management for the visit map server

use std::{path::PathBuf, time::Duration};

use config::{Config, Environment, Map};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub shutdown_grace_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub connect_attempts: u32,
    pub connect_retry_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

/// Flat view of the environment, one field per variable
#[derive(Debug, Deserialize)]
struct EnvSettings {
    db_host: Option<String>,
    db_user: Option<String>,
    db_password: Option<String>,
    db_name: Option<String>,
    db_port: u16,
    db_max_connections: u32,
    connect_attempts: u32,
    connect_retry_secs: u64,
    http_host: String,
    http_port: u16,
    static_dir: PathBuf,
    seed_file: PathBuf,
    shutdown_grace_secs: u64,
    log_level: String,
    log_format: String,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> AppResult<Self> {
        Self::from_env(Environment::default())
    }

    /// Load configuration from an explicit set of variables instead of the process environment
    pub fn from_vars(vars: Map<String, String>) -> AppResult<Self> {
        Self::from_env(Environment::default().source(Some(vars)))
    }

    fn from_env(environment: Environment) -> AppResult<Self> {
        let settings: EnvSettings = Config::builder()
            .set_default("db_port", 5432)
            .and_then(|b| b.set_default("db_max_connections", 10))
            .and_then(|b| b.set_default("connect_attempts", 30))
            .and_then(|b| b.set_default("connect_retry_secs", 1))
            .and_then(|b| b.set_default("http_host", "0.0.0.0"))
            .and_then(|b| b.set_default("http_port", 8000))
            .and_then(|b| b.set_default("static_dir", "./static"))
            .and_then(|b| b.set_default("seed_file", "./static/countries.geojson"))
            .and_then(|b| b.set_default("shutdown_grace_secs", 5))
            .and_then(|b| b.set_default("log_level", "info"))
            .and_then(|b| b.set_default("log_format", "pretty"))
            .map_err(|e| AppError::Config(e.to_string()))?
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            database: DatabaseConfig {
                host: required("DB_HOST", settings.db_host)?,
                user: required("DB_USER", settings.db_user)?,
                password: required("DB_PASSWORD", settings.db_password)?,
                name: required("DB_NAME", settings.db_name)?,
                port: settings.db_port,
                max_connections: settings.db_max_connections,
                connect_attempts: settings.connect_attempts.max(1),
                connect_retry_secs: settings.connect_retry_secs,
            },
            server: ServerConfig {
                host: settings.http_host,
                port: settings.http_port,
                static_dir: settings.static_dir,
                shutdown_grace_secs: settings.shutdown_grace_secs,
            },
            logging: LoggingConfig {
                level: settings.log_level,
                format: settings.log_format,
            },
            seed: SeedConfig {
                file: settings.seed_file,
            },
        })
    }
}

fn required(key: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Config(format!(
            "Missing required environment variable: {}",
            key
        ))),
    }
}

impl DatabaseConfig {
    /// Connection options for PostgreSQL; TLS is left to the network layer
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.connect_retry_secs)
    }
}

impl ServerConfig {
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
