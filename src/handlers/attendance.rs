//! Attendance handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::extract::{ApiJson, ApiPath};
use crate::models::attendance::{AttendanceEntry, AttendanceRecord, MarkAttendanceRequest};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::response::{created, ok, ApiResponse};

/// `POST /events/:id/attendance`
pub async fn mark_attendance(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
    ApiJson(request): ApiJson<MarkAttendanceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AttendanceRecord>>)> {
    let record = ctx.services.attendance.mark_attendance(event_id, request).await?;
    Ok(created("Attendance marked successfully", record))
}

/// `GET /events/:id/attendance`
pub async fn list_attendance(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
) -> Result<Json<ApiResponse<Vec<AttendanceEntry>>>> {
    let entries = ctx.services.attendance.list_attendance(event_id).await?;
    Ok(ok("Attendance fetched successfully", entries))
}
