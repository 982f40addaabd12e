//! Registration handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::extract::{ApiJson, ApiPath};
use crate::models::registration::{RegisterStudentRequest, Registrant, Registration};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::response::{created, ok, ApiResponse};

/// `POST /events/:id/register`
pub async fn register_student(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
    ApiJson(request): ApiJson<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Registration>>)> {
    let registration = ctx.services.registrations.register_student(event_id, request).await?;
    Ok(created("Student registered successfully", registration))
}

/// `GET /events/:id/registrations`
pub async fn list_registrations(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
) -> Result<Json<ApiResponse<Vec<Registrant>>>> {
    let registrants = ctx.services.registrations.list_registrations(event_id).await?;
    Ok(ok("Registrations fetched successfully", registrants))
}
