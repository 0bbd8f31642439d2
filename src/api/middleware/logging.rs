//! Request/response logging middleware.
//!
//! Brackets every handler invocation: one entry on arrival, one on
//! completion with the status (or fault) and elapsed wall time.

use axum::{
    extract::{ConnectInfo, Request},
    http::{
        header::{ORIGIN, USER_AGENT},
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use std::net::SocketAddr;
use std::time::Instant;

use crate::config::{HEADER_FORWARDED_FOR, HEADER_REAL_IP, UNKNOWN_CLIENT};
use crate::errors::FaultDetail;

/// Resolve the originating client for log entries.
///
/// Precedence: first `X-Forwarded-For` hop, then `X-Real-IP`, then the
/// transport peer, then `"Unknown"`. Values are trusted as-is; this is
/// for observability only and must not drive access decisions.
pub fn resolve_client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    // First hop in the chain is the client
    if let Some(ip) = header_str(headers, HEADER_FORWARDED_FOR)
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return ip.to_string();
    }

    if let Some(ip) = header_str(headers, HEADER_REAL_IP)
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return ip.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Log request arrival and completion for every call.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let started = Instant::now();

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = resolve_client_identity(request.headers(), peer);
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_agent = header_str(request.headers(), USER_AGENT.as_str())
        .unwrap_or("-")
        .to_string();
    let origin = header_str(request.headers(), ORIGIN.as_str())
        .unwrap_or("-")
        .to_string();

    tracing::info!(
        timestamp = %Utc::now().to_rfc3339(),
        client = %client,
        method = %method,
        url = %uri,
        user_agent = %user_agent,
        origin = %origin,
        "Request received"
    );

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let status = response.status();
    let fault = response.extensions().get::<FaultDetail>().map(|f| f.0.as_str());

    if status.is_server_error() {
        tracing::error!(
            client = %client,
            method = %method,
            url = %uri,
            status = status.as_u16(),
            fault = fault.unwrap_or("-"),
            elapsed_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            client = %client,
            method = %method,
            url = %uri,
            status = status.as_u16(),
            fault = fault.unwrap_or("-"),
            elapsed_ms,
            "Request rejected"
        );
    } else {
        tracing::info!(
            client = %client,
            method = %method,
            url = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "Request completed"
        );
    }

    response
}
