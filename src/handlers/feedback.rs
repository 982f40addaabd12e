//! Feedback handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::extract::{ApiJson, ApiPath};
use crate::models::feedback::{Feedback, FeedbackSummary, SubmitFeedbackRequest};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::response::{created, ok, ApiResponse};

/// `POST /events/:id/feedback`
pub async fn submit_feedback(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
    ApiJson(request): ApiJson<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Feedback>>)> {
    let feedback = ctx.services.feedback.submit_feedback(event_id, request).await?;
    Ok(created("Feedback submitted successfully", feedback))
}

/// `GET /events/:id/feedback`
pub async fn list_feedback(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
) -> Result<Json<ApiResponse<FeedbackSummary>>> {
    let summary = ctx.services.feedback.list_feedback(event_id).await?;
    Ok(ok("Feedback fetched successfully", summary))
}
