//! Startup table creation.

use crate::error::AppError;
use crate::storage::connection::ConnectionAcquirer;
use std::time::Duration;
use tracing::{info, instrument};

pub const CREATE_PRODUCT_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS producto (
    id INT AUTO_INCREMENT PRIMARY KEY,
    nombre VARCHAR(100) NOT NULL,
    descripcion TEXT NOT NULL,
    precio DOUBLE NOT NULL,
    stock INT NOT NULL
)";

/// Waits `startup_delay` for the database to come up, then makes sure the `producto`
/// table exists. Any failure here should abort startup.
#[instrument(name = "schema::initialize", skip(acquirer))]
pub async fn initialize(
    acquirer: &ConnectionAcquirer,
    startup_delay: Duration,
) -> Result<(), AppError> {
    if !startup_delay.is_zero() {
        info!(
            delay_secs = startup_delay.as_secs_f64(),
            "Waiting for the database before initializing schema"
        );
        tokio::time::sleep(startup_delay).await;
    }

    let mut conn = acquirer.acquire().await?;
    sqlx::query(CREATE_PRODUCT_TABLE_SQL)
        .execute(&mut *conn)
        .await?;
    conn.release().await;

    info!("Product table is ready");
    Ok(())
}
