//! Cross-origin access control.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CORS_MAX_AGE_SECONDS;

/// Build the CORS layer for the configured allow-list.
///
/// Pre-flight requests are answered by the layer itself. Requests from
/// other origins still reach the handlers but get no permission headers,
/// leaving enforcement to the browser.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers(Any)
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECONDS))
}

/// `*` in the allow-list opens the service to every origin; anything
/// that is not a valid header value is dropped with a warning.
fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(allowed)
}
