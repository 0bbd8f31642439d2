//! Application route configuration.

use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{cat_routes, health_routes};
use super::middleware::{cors_layer, handle_panic, request_logging_middleware};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured.
///
/// Layers run outermost first: CORS, then request logging, then panic
/// capture around the handler, so a panicking handler is still logged.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(health_routes())
        .merge(cat_routes())
        // OpenAPI document and Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors)
        .with_state(state)
}
