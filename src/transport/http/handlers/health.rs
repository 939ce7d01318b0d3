use crate::transport::http::types::{AppState, ReadinessResponse, StatusResponse, STATUS_OK};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Liveness: answers as long as the process is running. No I/O.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is alive", body = StatusResponse)
    )
)]
pub async fn liveness_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_OK.to_string(),
    })
}

/// Readiness: goes through the same bounded-retry acquisition as the product handlers.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Database reachable", body = ReadinessResponse),
        (status = 503, description = "Database unreachable", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.acquirer.acquire().await {
        Ok(conn) => {
            conn.release().await;
            (
                StatusCode::OK,
                Json(ReadinessResponse {
                    status: "healthy".to_string(),
                    database: Some("connected".to_string()),
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unhealthy".to_string(),
                    database: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
