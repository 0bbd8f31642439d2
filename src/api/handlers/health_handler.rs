//! Health check handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{STATUS_DEGRADED, STATUS_HEALTHY, STATUS_UNHEALTHY};

/// Liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    /// ISO-8601 timestamp of the check
    pub timestamp: String,
}

/// Readiness response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: ServiceStatus,
}

/// Status of a single dependency
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Liveness probe; never touches the store
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_HEALTHY.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness probe with database connectivity check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = ReadinessResponse),
        (status = 503, description = "Store unreachable", body = ReadinessResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let database = match state.database.ping().await {
        Ok(_) => ServiceStatus {
            status: STATUS_HEALTHY.to_string(),
            error: None,
        },
        Err(e) => ServiceStatus {
            status: STATUS_UNHEALTHY.to_string(),
            error: Some(e.to_string()),
        },
    };

    let healthy = database.error.is_none();
    let response = ReadinessResponse {
        status: if healthy { STATUS_HEALTHY } else { STATUS_DEGRADED }.to_string(),
        database,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
