//! Persistence configuration for the `PostgreSQL` adapters.
//!
//! Settings come from environment variables:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `ORCHESTRA_DATABASE_URL` (or `DATABASE_URL`) | connection URL | required |
//! | `ORCHESTRA_DB_POOL_SIZE` | maximum pooled connections | `10` |
//! | `ORCHESTRA_DB_CONNECT_TIMEOUT_SECS` | pool checkout timeout | `30` |

use crate::task::adapters::postgres::TaskPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Primary variable holding the connection URL.
pub const DATABASE_URL_VAR: &str = "ORCHESTRA_DATABASE_URL";
/// Fallback variable holding the connection URL.
pub const FALLBACK_DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Variable holding the maximum pool size.
pub const POOL_SIZE_VAR: &str = "ORCHESTRA_DB_POOL_SIZE";
/// Variable holding the checkout timeout in seconds.
pub const CONNECT_TIMEOUT_VAR: &str = "ORCHESTRA_DB_CONNECT_TIMEOUT_SECS";

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No connection URL was configured.
    #[error("missing database URL, set {DATABASE_URL_VAR} or {FALLBACK_DATABASE_URL_VAR}")]
    MissingDatabaseUrl,

    /// A variable holds a value that cannot be used.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Offending variable.
        key: &'static str,
        /// Raw value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for the task store.
#[derive(Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub max_pool_size: u32,
    /// How long a checkout waits for a free connection.
    pub connection_timeout: Duration,
}

impl PersistenceConfig {
    /// Pool size used when none is configured.
    pub const DEFAULT_POOL_SIZE: u32 = 10;
    /// Checkout timeout used when none is configured.
    pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a configuration with default pool settings.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: Self::DEFAULT_POOL_SIZE,
            connection_timeout: Self::DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is missing or a numeric setting
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL is missing or a numeric setting
    /// does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .or_else(|| lookup(FALLBACK_DATABASE_URL_VAR))
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let max_pool_size = lookup(POOL_SIZE_VAR)
            .map(|raw| parse_positive(POOL_SIZE_VAR, &raw))
            .transpose()?
            .unwrap_or(Self::DEFAULT_POOL_SIZE);
        let connection_timeout = lookup(CONNECT_TIMEOUT_VAR)
            .map(|raw| parse_positive(CONNECT_TIMEOUT_VAR, &raw))
            .transpose()?
            .map_or(Self::DEFAULT_CONNECTION_TIMEOUT, |secs| {
                Duration::from_secs(u64::from(secs))
            });

        Ok(Self {
            database_url,
            max_pool_size,
            connection_timeout,
        })
    }

    /// Builds the connection pool used by the `PostgreSQL` repositories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot establish its
    /// initial connections.
    pub fn build_pool(&self) -> Result<TaskPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        let pool = Pool::builder()
            .max_size(self.max_pool_size)
            .connection_timeout(self.connection_timeout)
            .build(manager)?;
        tracing::info!(
            max_pool_size = self.max_pool_size,
            timeout_secs = self.connection_timeout.as_secs(),
            "task store connection pool ready"
        );
        Ok(pool)
    }
}

impl fmt::Debug for PersistenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceConfig")
            .field("database_url", &redact_credentials(&self.database_url))
            .field("max_pool_size", &self.max_pool_size)
            .field("connection_timeout", &self.connection_timeout)
            .finish()
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key,
        value: raw.to_owned(),
        reason: reason.to_owned(),
    };
    let value = raw
        .trim()
        .parse::<u32>()
        .map_err(|err| invalid(&err.to_string()))?;
    if value == 0 {
        return Err(invalid("must be positive"));
    }
    Ok(value)
}

/// Hides the password segment of a connection URL.
fn redact_credentials(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_owned();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_owned();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_owned(),
    }
}
