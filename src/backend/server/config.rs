/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (optionally seeded from a `.env` file by the binary) and opens the
 * PostgreSQL connection pool.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `BIND_ADDR` - listen address, default `127.0.0.1:3000`
 * - `DB_MAX_CONNECTIONS` - pool size, default `5`
 * - `BCRYPT_COST` - bcrypt work factor (4-31), default `bcrypt::DEFAULT_COST`
 * - `TOKEN_TTL_SECS` - session lifetime in seconds, default 30 days, `0` disables expiry
 *
 * # Error Handling
 *
 * Unlike optional integrations, the database is required: a missing or
 * invalid setting, an unreachable database or a failed migration stops
 * startup with a `ConfigError`.
 */

use std::net::SocketAddr;
use std::str::FromStr;

use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::sessions::TokenPolicy;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub bcrypt_cost: u32,
    /// `None` when tokens never expire
    pub token_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr: SocketAddr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", Some(DEFAULT_MAX_CONNECTIONS))?;

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", Some(bcrypt::DEFAULT_COST))?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                var: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let ttl_secs: i64 = parse_or(&lookup, "TOKEN_TTL_SECS", Some(DEFAULT_TOKEN_TTL_SECS))?;
        let token_ttl = match ttl_secs {
            0 => None,
            secs if secs > 0 => Some(Duration::seconds(secs)),
            secs => {
                return Err(ConfigError::Invalid {
                    var: "TOKEN_TTL_SECS",
                    value: secs.to_string(),
                    reason: "must not be negative".to_string(),
                })
            }
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            bcrypt_cost,
            token_ttl,
        })
    }

    pub fn token_policy(&self) -> TokenPolicy {
        TokenPolicy::new(self.token_ttl)
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        }),
        None => default.ok_or(ConfigError::Missing(var)),
    }
}

/// Open the connection pool and run pending migrations
pub async fn connect_database(config: &ServerConfig) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
