//! Request deadline middleware

use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::utils::response::ApiResponse;

/// Answer 408 with the failure envelope when a request outlives `limit`
pub async fn enforce_timeout(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(method = %method, path = %path, limit_ms = limit.as_millis(), "Request timed out");
            (
                StatusCode::REQUEST_TIMEOUT,
                Json(ApiResponse::<()>::failure("Request timed out")),
            )
                .into_response()
        }
    }
}
