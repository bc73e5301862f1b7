//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Logs one line per completed request with method, path, status, and
/// latency. Failures have already been logged with operation context by
/// the time the response reaches this layer.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency = start.elapsed();

    info!(
        target: "http",
        %method,
        path,
        status = status.as_u16(),
        latency_ms = latency.as_millis() as u64,
        "request completed"
    );

    response
}
