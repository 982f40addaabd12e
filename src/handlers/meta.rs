//! Service metadata handlers: index, health and the route fallback

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::state::AppContext;
use crate::utils::response::{ok, ApiResponse};

/// `GET /`
pub async fn index() -> Json<ApiResponse<Value>> {
    ok(
        "Campus Event Management Platform API",
        json!({
            "name": crate::NAME,
            "version": crate::VERSION,
            "status": "running",
            "endpoints": {
                "events": "POST /events, GET /events, GET /events/:id",
                "registration": "POST /events/:id/register, GET /events/:id/registrations",
                "attendance": "POST /events/:id/attendance, GET /events/:id/attendance",
                "feedback": "POST /events/:id/feedback, GET /events/:id/feedback",
                "reports": "GET /reports/popularity, GET /reports/student/:id, GET /reports/top-students, GET /reports/overview"
            }
        }),
    )
}

/// `GET /health`
pub async fn health(State(ctx): State<AppContext>) -> Response {
    match ctx.services.health_check().await {
        Ok(()) => ok("Service is healthy", json!({ "status": "healthy" })).into_response(),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<()>::failure("Database unavailable")),
            )
                .into_response()
        }
    }
}

/// Any unmatched route
pub async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::failure("Route not found")))
}
