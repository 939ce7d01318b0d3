//! The single-statement SQL operations over `producto`.
//!
//! Each function runs exactly one statement on the connection it is given. The engine
//! runs in autocommit mode, so writes are committed when the statement returns.

use crate::domain::product::{Product, ProductPayload};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, FromRow, MySqlConnection, Row, TypeInfo};

const SELECT_ALL_SQL: &str = "SELECT id, nombre, descripcion, precio, stock FROM producto";
const SELECT_BY_ID_SQL: &str =
    "SELECT id, nombre, descripcion, precio, stock FROM producto WHERE id = ?";
const INSERT_SQL: &str =
    "INSERT INTO producto (nombre, descripcion, precio, stock) VALUES (?, ?, ?, ?)";
const UPDATE_SQL: &str =
    "UPDATE producto SET nombre = ?, descripcion = ?, precio = ?, stock = ? WHERE id = ?";
const DELETE_SQL: &str = "DELETE FROM producto WHERE id = ?";

/// True for column types that hold a 4-byte float. Tables created by older deployments
/// declare `precio FLOAT`; this crate creates `DOUBLE`.
pub fn is_single_precision(type_name: &str) -> bool {
    type_name.eq_ignore_ascii_case("FLOAT")
}

fn decode_precio(row: &MySqlRow) -> Result<f64, sqlx::Error> {
    let column = row.try_column("precio")?;
    if is_single_precision(column.type_info().name()) {
        Ok(f64::from(row.try_get::<f32, _>("precio")?))
    } else {
        row.try_get("precio")
    }
}

impl<'r> FromRow<'r, MySqlRow> for Product {
    fn from_row(row: &'r MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Product {
            id: row.try_get("id")?,
            nombre: row.try_get("nombre")?,
            descripcion: row.try_get("descripcion")?,
            precio: decode_precio(row)?,
            stock: row.try_get("stock")?,
        })
    }
}

pub async fn fetch_all(conn: &mut MySqlConnection) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(SELECT_ALL_SQL)
        .fetch_all(conn)
        .await
}

pub async fn fetch_one(
    conn: &mut MySqlConnection,
    id: i32,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(SELECT_BY_ID_SQL)
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Returns the id the engine assigned to the new row.
pub async fn insert(
    conn: &mut MySqlConnection,
    payload: &ProductPayload,
) -> Result<u64, sqlx::Error> {
    let done = sqlx::query(INSERT_SQL)
        .bind(&payload.nombre)
        .bind(&payload.descripcion)
        .bind(payload.precio)
        .bind(payload.stock)
        .execute(conn)
        .await?;
    Ok(done.last_insert_id())
}

/// Returns the number of rows matched by `id` (0 or 1).
pub async fn update(
    conn: &mut MySqlConnection,
    id: i32,
    payload: &ProductPayload,
) -> Result<u64, sqlx::Error> {
    let done = sqlx::query(UPDATE_SQL)
        .bind(&payload.nombre)
        .bind(&payload.descripcion)
        .bind(payload.precio)
        .bind(payload.stock)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(done.rows_affected())
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete(conn: &mut MySqlConnection, id: i32) -> Result<u64, sqlx::Error> {
    let done = sqlx::query(DELETE_SQL).bind(id).execute(conn).await?;
    Ok(done.rows_affected())
}
