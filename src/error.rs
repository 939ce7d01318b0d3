use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The database could not be reached within the retry budget.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("could not connect to the database after {attempts} attempt(s): {last_error}")]
    Exhausted { attempts: u32, last_error: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Database Unavailable: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Database Error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Storage(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(application_error = %self, %status, "Responding with error");
        } else {
            tracing::warn!(application_error = %self, %status, "Responding with error");
        }

        let message = match &self {
            AppError::Validation(m)
            | AppError::BadRequest(m)
            | AppError::NotFound(m)
            | AppError::Config(m) => m.clone(),
            AppError::Connection(e) => e.to_string(),
            // Driver detail stays in the log.
            AppError::Storage(_) => "Database operation failed".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
