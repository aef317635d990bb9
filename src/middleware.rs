use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

use crate::handlers::AppState;

/// Counts a file server hit, then hands the request on.
///
/// The count happens before the file server runs, so misses still count.
pub async fn count_hits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.hits.increment();
    next.run(request).await
}

/// Logging middleware for request/response tracking
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client_ip = client_ip(&request);

    info!(
        target: "chirpy::middleware",
        method = %method,
        uri = %uri,
        client_ip = %client_ip,
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        target: "chirpy::middleware",
        method = %method,
        uri = %uri,
        status = %response.status(),
        "Request completed"
    );

    response
}

fn client_ip(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string());

    forwarded
        .or_else(|| {
            request
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
