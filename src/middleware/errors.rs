//! Error response middleware

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::state::AppContext;
use crate::utils::errors::ErrorDetail;
use crate::utils::response::ApiResponse;

const PANIC_MESSAGE: &str = "Internal server error";

/// Copy the internal detail of a 5xx response into its `error` field.
///
/// Only outside production; otherwise the detail is dropped.
pub async fn attach_error_detail(
    State(ctx): State<AppContext>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(detail) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };
    if !ctx.settings.server.exposes_error_details() {
        return response;
    }

    let status = response.status();
    (
        status,
        Json(ApiResponse::<()>::failure_with_detail(detail.message, detail.detail)),
    )
        .into_response()
}

/// Turn a handler panic into a 500 envelope
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "Request handler panicked");

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::failure(PANIC_MESSAGE)),
    )
        .into_response();
    response.extensions_mut().insert(ErrorDetail {
        message: PANIC_MESSAGE.to_string(),
        detail,
    });
    response
}
