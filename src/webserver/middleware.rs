/// Webserver middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::logger::{self, LogTag};

/// Log method, path, status and latency of every request (debug only)
pub async fn log_request(request: Request, next: Next) -> Response {
    if !logger::is_debug_enabled(LogTag::Webserver) {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    logger::debug(
        LogTag::Webserver,
        &format!(
            "{} {} -> {} ({}ms)",
            method,
            path,
            response.status().as_u16(),
            start.elapsed().as_millis()
        ),
    );

    response
}
