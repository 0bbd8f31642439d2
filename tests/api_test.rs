//! Integration tests for API endpoints.
//!
//! These tests drive the full router (CORS, request logging, handlers)
//! against an in-memory SQLite store.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use cats_api::api::{create_router, AppState};
use cats_api::config::Config;
use cats_api::domain::{Cat, CatInput};
use cats_api::errors::{AppError, AppResult};
use cats_api::infra::Database;
use cats_api::services::CatService;

const ALLOWED_ORIGIN: &str = "https://cats.example";

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        // A single connection keeps every statement on the same in-memory database
        database_max_connections: 1,
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
        ..Config::default()
    }
}

async fn test_database() -> Arc<Database> {
    Arc::new(
        Database::connect(&test_config())
            .await
            .expect("in-memory database should connect"),
    )
}

async fn test_app() -> Router {
    let state = AppState::from_config(test_database().await, test_config());
    create_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn tom() -> Value {
    json!({ "name": "Tom", "breed": "Tabby", "age": 3, "weight": 4.5 })
}

async fn create(app: &Router, body: &Value) -> Value {
    let (status, _, created) = send(app, with_json(Method::POST, "/cats/", body)).await;
    assert_eq!(status, StatusCode::OK);
    created
}

async fn count(app: &Router) -> usize {
    let (status, _, body) = send(app, get("/cats/?limit=1000")).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().len()
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_reports_healthy_with_timestamp() {
    let app = test_app().await;

    let (status, _, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_readiness_pings_database() {
    let app = test_app().await;

    let (status, _, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app().await;

    let (status, _, body) = send(&app, get("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/cats/{id}"].is_object());
}

// =============================================================================
// CRUD Tests
// =============================================================================

#[tokio::test]
async fn test_create_returns_id_and_submitted_fields() {
    let app = test_app().await;

    let created = create(&app, &tom()).await;

    assert!(created["id"].as_i64().unwrap() >= 1);
    assert_eq!(created["name"], "Tom");
    assert_eq!(created["breed"], "Tabby");
    assert_eq!(created["age"].as_f64(), Some(3.0));
    assert_eq!(created["weight"].as_f64(), Some(4.5));
}

#[tokio::test]
async fn test_create_then_get_is_field_for_field_equal() {
    let app = test_app().await;
    let created = create(&app, &tom()).await;

    let uri = format!("/cats/{}", created["id"]);
    let (status, _, fetched) = send(&app, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_cat_is_not_found() {
    let app = test_app().await;

    let (status, _, body) = send(&app, get("/cats/9999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Cat not found" }));
}

#[tokio::test]
async fn test_age_as_text_is_rejected_without_creating() {
    let app = test_app().await;
    let payload = json!({ "name": "Tom", "breed": "Tabby", "age": "three", "weight": 4.5 });

    let (status, _, body) = send(&app, with_json(Method::POST, "/cats/", &payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = test_app().await;
    let payload = json!({ "name": "Tom", "age": 3, "weight": 4.5 });

    let (status, _, _) = send(&app, with_json(Method::POST, "/cats/", &payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(count(&app).await, 0);
}

#[tokio::test]
async fn test_negative_weight_is_rejected() {
    let app = test_app().await;
    let payload = json!({ "name": "Tom", "breed": "Tabby", "age": 3, "weight": -1 });

    let (status, _, body) = send(&app, with_json(Method::POST, "/cats/", &payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "weight must be non-negative");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/cats/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/cats/")
        .body(Body::from(tom().to_string()))
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let app = test_app().await;
    let created = create(&app, &tom()).await;
    let uri = format!("/cats/{}", created["id"]);
    let payload = json!({ "name": "Felix", "breed": "Siamese", "age": 5.5, "weight": 3.2 });

    let (status, _, updated) = send(&app, with_json(Method::PUT, &uri, &payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Felix");
    assert_eq!(updated["breed"], "Siamese");
    assert_eq!(updated["age"].as_f64(), Some(5.5));
    assert_eq!(updated["weight"].as_f64(), Some(3.2));

    let (_, _, fetched) = send(&app, get(&uri)).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_cat_leaves_store_unchanged() {
    let app = test_app().await;
    create(&app, &tom()).await;

    let (status, _, body) = send(&app, with_json(Method::PUT, "/cats/9999", &tom())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Cat not found");
    assert_eq!(count(&app).await, 1);
}

#[tokio::test]
async fn test_update_with_invalid_body_is_rejected() {
    let app = test_app().await;
    let created = create(&app, &tom()).await;
    let uri = format!("/cats/{}", created["id"]);

    let payload = json!({ "name": 7, "breed": "Tabby", "age": 3, "weight": 4.5 });
    let (status, _, _) = send(&app, with_json(Method::PUT, &uri, &payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (_, _, fetched) = send(&app, get(&uri)).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = test_app().await;
    let created = create(&app, &tom()).await;
    let uri = format!("/cats/{}", created["id"]);

    let (status, _, body) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Cat deleted successfully" }));

    let (status, _, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = test_app().await;
    create(&app, &tom()).await;
    let second = create(&app, &tom()).await;

    send(&app, delete(&format!("/cats/{}", second["id"]))).await;
    let third = create(&app, &tom()).await;

    assert!(third["id"].as_i64().unwrap() > second["id"].as_i64().unwrap());
}

// =============================================================================
// Listing Tests
// =============================================================================

#[tokio::test]
async fn test_list_windows_partition_without_overlap() {
    let app = test_app().await;
    for i in 0..5 {
        let payload = json!({ "name": format!("cat-{i}"), "breed": "Tabby", "age": i, "weight": 4 });
        create(&app, &payload).await;
    }

    let (_, _, first) = send(&app, get("/cats/?skip=0&limit=2")).await;
    let (_, _, second) = send(&app, get("/cats/?skip=2&limit=2")).await;
    let (_, _, all) = send(&app, get("/cats/")).await;

    let ids = |v: &Value| -> Vec<i64> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect()
    };
    let first = ids(&first);
    let second = ids(&second);
    let all = ids(&all);

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert!(first.iter().all(|id| !second.contains(id)));
    assert_eq!([first, second].concat(), all[..4].to_vec());
}

#[tokio::test]
async fn test_list_without_trailing_slash() {
    let app = test_app().await;
    create(&app, &tom()).await;

    let (status, _, body) = send(&app, get("/cats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    let app = test_app().await;

    let (status, _, _) = send(&app, get("/cats/?skip=-1")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, _) = send(&app, get("/cats/?limit=lots")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, _) = send(&app, get("/cats/abc")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_out_of_range_window_is_rejected() {
    let app = test_app().await;
    create(&app, &tom()).await;

    let (status, _, body) = send(&app, get("/cats/?skip=18446744073709551615")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _, _) = send(&app, get("/cats/?limit=9223372036854775808")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, body) = send(&app, get("/cats/?limit=-3")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "limit must be non-negative");

    let (status, _, body) = send(&app, get("/cats/?limit=9223372036854775807")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

// =============================================================================
// CORS Tests
// =============================================================================

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/cats/")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(&app, request).await;

    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "3600");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }
}

#[tokio::test]
async fn test_disallowed_origin_gets_no_permission_headers() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/cats/")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();

    let (status, headers, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_allowed_origin_on_simple_request() {
    let app = test_app().await;
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = send(&app, request).await;

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
}

// =============================================================================
// Fault Tests
// =============================================================================

/// Service whose every call fails like a broken store or panics.
struct FaultyCatService {
    panic: bool,
}

impl FaultyCatService {
    fn fail(&self) -> AppError {
        if self.panic {
            panic!("store handle poisoned");
        }
        AppError::from(sea_orm::DbErr::Custom("database is locked".to_string()))
    }
}

#[async_trait]
impl CatService for FaultyCatService {
    async fn create_cat(&self, _input: CatInput) -> AppResult<Cat> {
        Err(self.fail())
    }

    async fn list_cats(&self, _skip: u64, _limit: u64) -> AppResult<Vec<Cat>> {
        Err(self.fail())
    }

    async fn get_cat(&self, _id: i32) -> AppResult<Cat> {
        Err(self.fail())
    }

    async fn update_cat(&self, _id: i32, _input: CatInput) -> AppResult<Cat> {
        Err(self.fail())
    }

    async fn delete_cat(&self, _id: i32) -> AppResult<()> {
        Err(self.fail())
    }
}

async fn faulty_app(panic: bool) -> Router {
    let state = AppState::new(
        Arc::new(FaultyCatService { panic }),
        test_database().await,
        test_config(),
    );
    create_router(state)
}

#[tokio::test]
async fn test_store_fault_is_surfaced_as_server_error() {
    let app = faulty_app(false).await;

    let (status, _, body) = send(&app, with_json(Method::POST, "/cats/", &tom())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("database is locked"));
}

#[tokio::test]
async fn test_handler_panic_becomes_server_error() {
    let app = faulty_app(true).await;

    let (status, _, body) = send(&app, get("/cats/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("store handle poisoned"));
}

// =============================================================================
// Request Logging Tests
// =============================================================================

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    fn line_with(&self, message: &str) -> String {
        self.contents()
            .lines()
            .find(|line| line.contains(message))
            .unwrap_or_else(|| panic!("no `{message}` entry in:\n{}", self.contents()))
            .to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Send `request` through `app` with a subscriber capturing this thread's logs.
async fn send_logged(app: &Router, request: Request<Body>) -> (StatusCode, LogBuffer) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (status, _, _) = send(app, request).await;
    (status, logs)
}

fn forwarded(mut request: Request<Body>) -> Request<Body> {
    request
        .headers_mut()
        .insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
    request
}

#[tokio::test]
async fn test_successful_request_is_bracketed_by_log_entries() {
    let app = test_app().await;

    let (status, logs) = send_logged(&app, forwarded(get("/cats/"))).await;

    assert_eq!(status, StatusCode::OK);
    let received = logs.line_with("Request received");
    assert!(received.contains("client=203.0.113.7"));
    assert!(received.contains("method=GET"));
    assert!(received.contains("url=/cats/"));

    let completed = logs.line_with("Request completed");
    assert!(completed.contains("client=203.0.113.7"));
    assert!(completed.contains("method=GET"));
    assert!(completed.contains("url=/cats/"));
    assert!(completed.contains("status=200"));
    assert!(completed.contains("elapsed_ms="));
}

#[tokio::test]
async fn test_store_fault_is_logged_with_description() {
    let app = faulty_app(false).await;

    let (status, logs) = send_logged(&app, forwarded(get("/cats/1"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(logs.line_with("Request received").contains("client=203.0.113.7"));
    let failed = logs.line_with("Request failed");
    assert!(failed.contains("client=203.0.113.7"));
    assert!(failed.contains("status=500"));
    assert!(failed.contains("fault="));
    assert!(failed.contains("database is locked"));
    assert!(failed.contains("elapsed_ms="));
}

#[tokio::test]
async fn test_handler_panic_is_still_logged_on_completion() {
    let app = faulty_app(true).await;

    let (status, logs) = send_logged(&app, get("/cats/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(logs.line_with("Request received").contains("client=Unknown"));
    let failed = logs.line_with("Request failed");
    assert!(failed.contains("client=Unknown"));
    assert!(failed.contains("status=500"));
    assert!(failed.contains("store handle poisoned"));
    assert!(failed.contains("elapsed_ms="));
}
