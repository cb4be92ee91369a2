use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::debug;

/// Log method, path, status and latency of every request
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    debug!(
        "{} {} -> {} in {:.2?}",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}
