use crate::app::product_service::ProductService;
use crate::error::AppError;
use crate::infra::config::Config;
use crate::storage::ConnectionAcquirer;
use axum::extract::rejection::{JsonRejection, PathRejection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub acquirer: ConnectionAcquirer,
    pub products: ProductService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let acquirer = ConnectionAcquirer::new(&config.database, config.retry);
        Self {
            products: ProductService::new(acquirer.clone()),
            acquirer,
        }
    }
}

pub const STATUS_OK: &str = "ok";

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Readiness check result. `database` is set when healthy, `error` when not.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatedResponse {
    pub status: String,
    pub id: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UpdatedResponse {
    pub status: String,
    pub updated: i32,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeletedResponse {
    pub status: String,
    pub deleted: i32,
}

/// Body of every 4xx/5xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn invalid_body(err: JsonRejection) -> AppError {
    AppError::Validation(format!(
        "Invalid JSON body: {} (expected: {{\"nombre\", \"descripcion\", \"precio\", \"stock\"}})",
        err.body_text()
    ))
}

pub fn invalid_id(err: PathRejection) -> AppError {
    AppError::BadRequest(format!("Invalid product id: {}", err.body_text()))
}
