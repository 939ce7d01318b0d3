use crate::domain::product::{Product, ProductPayload};
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{
    AppState, CreatedResponse, DeletedResponse, ErrorResponse, ReadinessResponse, StatusResponse,
    UpdatedResponse,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness_handler,
        health::readiness_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        Product,
        ProductPayload,
        StatusResponse,
        ReadinessResponse,
        CreatedResponse,
        UpdatedResponse,
        DeletedResponse,
        ErrorResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::liveness_handler))
        .route("/healthz", get(health::readiness_handler))
        .route(
            "/productos",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/productos/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}

/// The full application: routes, OpenAPI docs, permissive CORS and request tracing.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
