use crate::domain::product::{Product, ProductPayload};
use crate::error::AppError;
use crate::transport::http::types::{
    invalid_body, invalid_id, AppState, CreatedResponse, DeletedResponse, UpdatedResponse,
    STATUS_OK,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/productos",
    responses(
        (status = 200, description = "All products, in storage order", body = Vec<Product>),
        (status = 503, description = "Database unreachable", body = ErrorResponse),
        (status = 500, description = "Statement failed", body = ErrorResponse)
    )
)]
#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.products.list().await?))
}

#[utoipa::path(
    get,
    path = "/productos/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
#[instrument(name = "handler::get_product", skip(state, path))]
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(id) = path.map_err(invalid_id)?;
    Ok(Json(state.products.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/productos",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse),
        (status = 500, description = "Statement failed", body = ErrorResponse)
    )
)]
#[instrument(name = "handler::create_product", skip(state, request))]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = request.map_err(invalid_body)?;
    let id = state.products.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            status: STATUS_OK.to_string(),
            id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/productos/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "All four fields replaced", body = UpdatedResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
#[instrument(name = "handler::update_product", skip(state, path, request))]
pub async fn update_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<UpdatedResponse>, AppError> {
    let Path(id) = path.map_err(invalid_id)?;
    let Json(payload) = request.map_err(invalid_body)?;
    state.products.update(id, &payload).await?;
    Ok(Json(UpdatedResponse {
        status: STATUS_OK.to_string(),
        updated: id,
    }))
}

#[utoipa::path(
    delete,
    path = "/productos/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product removed", body = DeletedResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
#[instrument(name = "handler::delete_product", skip(state, path))]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(id) = path.map_err(invalid_id)?;
    state.products.delete(id).await?;
    Ok(Json(DeletedResponse {
        status: STATUS_OK.to_string(),
        deleted: id,
    }))
}
