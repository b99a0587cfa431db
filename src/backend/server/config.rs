/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the creation of the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary before this runs). Everything has a local-development
 * default except `SECRET_KEY`: the server refuses to start without a
 * signing secret.
 *
 * | Variable             | Default                   |
 * |----------------------|---------------------------|
 * | `SECRET_KEY`         | required                  |
 * | `DATABASE_URL`       | `sqlite://feedback.db`    |
 * | `BIND_ADDR`          | `0.0.0.0`                 |
 * | `PORT`               | `4000`                    |
 * | `CORS_ORIGIN`        | `http://localhost:5173`   |
 * | `BCRYPT_COST`        | `bcrypt::DEFAULT_COST`    |
 * | `DB_MAX_CONNECTIONS` | `5`                       |
 */

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://feedback.db";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Server configuration
///
/// Constructed once at startup and handed to [`crate::backend::server::init::create_app`].
/// Nothing in the server reads the environment after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Token signing secret
    pub secret_key: String,
    /// sqlx connection string for the SQLite database
    pub database_url: String,
    /// Listen address
    pub bind_addr: IpAddr,
    /// Listen port
    pub port: u16,
    /// Browser origin allowed by CORS
    pub cors_origin: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Maximum pooled database connections
    pub max_connections: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(secret) = get("SECRET_KEY") {
            builder = builder.secret_key(secret);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(addr) = get("BIND_ADDR") {
            builder = builder.bind_addr(parse_value("BIND_ADDR", &addr)?);
        }
        if let Some(port) = get("PORT") {
            builder = builder.port(parse_value("PORT", &port)?);
        }
        if let Some(origin) = get("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }
        if let Some(max) = get("DB_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_value("DB_MAX_CONNECTIONS", &max)?);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("{} is outside 4..=31", self.bcrypt_cost),
            });
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    secret_key: Option<String>,
    database_url: Option<String>,
    bind_addr: Option<IpAddr>,
    port: Option<u16>,
    cors_origin: Option<String>,
    bcrypt_cost: Option<u32>,
    max_connections: Option<u32>,
}

impl AppConfigBuilder {
    pub fn secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = Some(secret.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn bind_addr(mut self, addr: IpAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            secret_key: self
                .secret_key
                .ok_or(ConfigError::MissingValue("SECRET_KEY"))?,
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: self.bind_addr.unwrap_or(IpAddr::from([0, 0, 0, 0])),
            port: self.port.unwrap_or(DEFAULT_PORT),
            cors_origin: self
                .cors_origin
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Open the SQLite pool and bring the schema up to date
///
/// This function:
/// 1. Parses `database_url`, creating the database file if it is missing
/// 2. Creates the connection pool
/// 3. Runs the embedded migrations
///
/// Unlike optional services, the store is required: any failure here is
/// returned to the caller and aborts startup.
pub async fn connect_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
