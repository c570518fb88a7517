//! Environment-driven configuration.
//!
//! Settings are read once at start-up. A `.env` file in the working
//! directory is honoured when present.
//!
//! | Variable                  | Required | Default |
//! |---------------------------|----------|---------|
//! | `DATABASE_URL`            | yes      |         |
//! | `TODO_POOL_SIZE`          | no       | `8`     |
//! | `TODO_UTC_OFFSET_MINUTES` | no       | `0`     |
//! | `TODO_LOG`                | no       | `info`  |

use crate::todo::adapters::postgres::ToDoPgPool;
use chrono::FixedOffset;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Connection string variable.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Pool size variable.
pub const POOL_SIZE_VAR: &str = "TODO_POOL_SIZE";
/// Reference offset variable, in minutes east of UTC.
pub const UTC_OFFSET_VAR: &str = "TODO_UTC_OFFSET_MINUTES";
/// Tracing filter variable.
pub const LOG_FILTER_VAR: &str = "TODO_LOG";

const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_LOG_FILTER: &str = "info";
const SECONDS_PER_MINUTE: i32 = 60;

/// Errors raised while loading configuration or building resources from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset.
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    /// A variable holds a value that cannot be used.
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// Offset whose calendar dates define named incoming ranges.
    pub reference_offset: FixedOffset,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DATABASE_URL` is unset or
    /// [`ConfigError::Invalid`] when an optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let pool_size = parse_optional(&lookup, POOL_SIZE_VAR, DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: POOL_SIZE_VAR,
                reason: "pool size must be positive".to_owned(),
            });
        }

        let offset_minutes: i32 = parse_optional(&lookup, UTC_OFFSET_VAR, 0)?;
        let reference_offset = offset_minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::Invalid {
                key: UTC_OFFSET_VAR,
                reason: format!("offset {offset_minutes} is outside -1439..=1439 minutes"),
            })?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            database_url,
            pool_size,
            reference_offset,
            log_filter,
        })
    }

    /// Builds the Diesel connection pool described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot be created.
    pub fn build_pool(&self) -> Result<ToDoPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.database_url);
        Ok(Pool::builder().max_size(self.pool_size).build(manager)?)
    }
}

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            reason: err.to_string(),
        }),
    }
}
