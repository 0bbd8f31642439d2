//! Converts handler panics into logged 500 responses.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

/// Panic handler for `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(format!("handler panicked: {}", detail)).into_response()
}
