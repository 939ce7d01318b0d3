//! Product operations: one connection, one statement, one release per call.
//!
//! The connection is released before the statement's outcome is inspected, so both the
//! success and the error path close it gracefully. Anything that unwinds past that point
//! still closes it through `ScopedConnection`'s drop.

use crate::domain::product::{Product, ProductPayload};
use crate::error::{AppError, Result};
use crate::storage::products;
use crate::storage::ConnectionAcquirer;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ProductService {
    acquirer: ConnectionAcquirer,
}

fn not_found(id: i32) -> AppError {
    warn!(product_id = id, "Product not found");
    AppError::NotFound(format!("Product with ID {} not found", id))
}

impl ProductService {
    pub fn new(acquirer: ConnectionAcquirer) -> Self {
        Self { acquirer }
    }

    #[instrument(name = "service::list_products", skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>> {
        let mut conn = self.acquirer.acquire().await?;
        let rows = products::fetch_all(&mut conn).await;
        conn.release().await;

        let rows = rows?;
        info!(count = rows.len(), "Fetched products");
        Ok(rows)
    }

    #[instrument(name = "service::get_product", skip(self))]
    pub async fn get(&self, id: i32) -> Result<Product> {
        let mut conn = self.acquirer.acquire().await?;
        let row = products::fetch_one(&mut conn, id).await;
        conn.release().await;

        row?.ok_or_else(|| not_found(id))
    }

    /// Inserts the product and returns the id assigned by the engine.
    #[instrument(name = "service::create_product", skip(self, payload))]
    pub async fn create(&self, payload: &ProductPayload) -> Result<u64> {
        payload.validate()?;

        let mut conn = self.acquirer.acquire().await?;
        let inserted = products::insert(&mut conn, payload).await;
        conn.release().await;

        let id = inserted?;
        info!(product_id = id, "Product created");
        Ok(id)
    }

    /// Replaces all four fields of an existing product.
    #[instrument(name = "service::update_product", skip(self, payload))]
    pub async fn update(&self, id: i32, payload: &ProductPayload) -> Result<()> {
        payload.validate()?;

        let mut conn = self.acquirer.acquire().await?;
        let matched = products::update(&mut conn, id, payload).await;
        conn.release().await;

        if matched? == 0 {
            return Err(not_found(id));
        }
        info!(product_id = id, "Product updated");
        Ok(())
    }

    #[instrument(name = "service::delete_product", skip(self))]
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut conn = self.acquirer.acquire().await?;
        let removed = products::delete(&mut conn, id).await;
        conn.release().await;

        if removed? == 0 {
            return Err(not_found(id));
        }
        info!(product_id = id, "Product deleted");
        Ok(())
    }
}
