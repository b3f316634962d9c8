//! Access logging middleware.
//!
//! Tags every request with a UUID, logs method, path, status and latency,
//! and echoes the id back in `X-Request-Id`.

use std::time::Instant;

use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        tracing::warn!(request_id = %request_id, %method, %path, status, elapsed_ms, "Request failed");
    } else {
        tracing::info!(request_id = %request_id, %method, %path, status, elapsed_ms, "Request served");
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
