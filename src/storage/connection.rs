//! Per-request database connections with bounded retry.
//!
//! There is no pool: every caller gets a fresh connection wrapped in a
//! [`ScopedConnection`] and gives it back before responding.

use crate::error::ConnectionError;
use crate::infra::config::{DatabaseConfig, RetryPolicy};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::fmt;
use std::future::Future;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info, warn};

/// Runs `connect` until it succeeds or `policy.max_attempts` attempts have failed,
/// sleeping `policy.backoff` between attempts. There is no sleep after the last failure.
pub async fn retry_connect<T, E, F, Fut>(
    policy: RetryPolicy,
    mut connect: F,
) -> Result<T, ConnectionError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match connect().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempt, "Database connection established after retry");
                }
                return Ok(conn);
            }
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "Database connection attempt failed"
                );
                last_error = e.to_string();
                if attempt < attempts {
                    tokio::time::sleep(policy.backoff).await;
                }
            }
        }
    }

    Err(ConnectionError::Exhausted {
        attempts,
        last_error,
    })
}

/// Opens connections to the product database.
#[derive(Clone)]
pub struct ConnectionAcquirer {
    options: MySqlConnectOptions,
    policy: RetryPolicy,
}

impl ConnectionAcquirer {
    pub fn new(database: &DatabaseConfig, policy: RetryPolicy) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&database.host)
            .port(database.port)
            .username(&database.user)
            .password(&database.password)
            .database(&database.name);
        Self { options, policy }
    }

    pub async fn acquire(&self) -> Result<ScopedConnection, ConnectionError> {
        let conn = retry_connect(self.policy, || self.options.connect()).await?;
        debug!("Database connection acquired");
        Ok(ScopedConnection { conn })
    }
}

/// A connection that lives for one unit of work.
///
/// Call [`ScopedConnection::release`] on the normal path for a graceful close. If the
/// guard is dropped instead (early return, `?`, panic), dropping the inner connection
/// closes its socket.
pub struct ScopedConnection {
    conn: MySqlConnection,
}

impl ScopedConnection {
    pub async fn release(self) {
        if let Err(e) = self.conn.close().await {
            debug!(error = %e, "Database connection did not close cleanly");
        }
    }
}

impl Deref for ScopedConnection {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}
