//! Centralized configuration (environment variables + defaults).
//!
//! Everything is read once at startup into [`Config`] and handed to the components that
//! need it; nothing else in the crate touches the environment.

use crate::error::AppError;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_DB_HOST: &str = "mariadb-service";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PASS: &str = "password";
pub const DEFAULT_DB_NAME: &str = "productos";

/// Total connection attempts before giving up (first try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Fixed wait between two connection attempts.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(2);
/// Wait before the schema initializer first touches the database.
pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_secs(10);

/// The server always listens on all interfaces, port 5000.
pub const BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5000);

/// Connection parameters for the product database.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASS.to_string(),
            name: DEFAULT_DB_NAME.to_string(),
        }
    }
}

/// Fixed-interval bounded retry: `max_attempts` tries, `backoff` apart, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_RETRY_BACKOFF,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub retry: RetryPolicy,
    pub startup_delay: Duration,
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            retry: RetryPolicy::default(),
            startup_delay: DEFAULT_STARTUP_DELAY,
            bind_addr: SocketAddr::from(BIND_ADDR),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to their defaults; a variable that is set but cannot be
    /// parsed is an error rather than silently defaulted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("Invalid DB_PORT '{}': {}", raw, e)))?,
            None => DEFAULT_DB_PORT,
        };

        let startup_delay = match lookup("DB_STARTUP_DELAY_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| {
                    AppError::Config(format!("Invalid DB_STARTUP_DELAY_SECS '{}': {}", raw, e))
                })?,
            None => DEFAULT_STARTUP_DELAY,
        };

        let database = DatabaseConfig {
            host: get("DB_HOST", DEFAULT_DB_HOST),
            port,
            user: get("DB_USER", DEFAULT_DB_USER),
            password: get("DB_PASS", DEFAULT_DB_PASS),
            name: get("DB_NAME", DEFAULT_DB_NAME),
        };

        Ok(Self {
            database,
            startup_delay,
            ..Self::default()
        })
    }
}
