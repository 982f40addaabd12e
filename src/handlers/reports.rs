//! Report handlers

use axum::{extract::State, Json};

use crate::handlers::extract::{ApiPath, ApiQuery};
use crate::models::report::{EventPopularity, Overview, StudentParticipation, TopStudent, TopStudentsQuery};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::response::{ok, ApiResponse};

/// `GET /reports/popularity`
pub async fn popularity(State(ctx): State<AppContext>) -> Result<Json<ApiResponse<Vec<EventPopularity>>>> {
    let rows = ctx.services.reports.popularity().await?;
    Ok(ok("Popularity report fetched successfully", rows))
}

/// `GET /reports/student/:id`
pub async fn student_participation(
    State(ctx): State<AppContext>,
    ApiPath(student_id): ApiPath<i64>,
) -> Result<Json<ApiResponse<StudentParticipation>>> {
    let row = ctx.services.reports.student_participation(student_id).await?;
    Ok(ok("Student participation report fetched successfully", row))
}

/// `GET /reports/top-students?limit=N`
pub async fn top_students(
    State(ctx): State<AppContext>,
    ApiQuery(query): ApiQuery<TopStudentsQuery>,
) -> Result<Json<ApiResponse<Vec<TopStudent>>>> {
    let rows = ctx.services.reports.top_students(query.limit).await?;
    Ok(ok("Top students report fetched successfully", rows))
}

/// `GET /reports/overview`
pub async fn overview(State(ctx): State<AppContext>) -> Result<Json<ApiResponse<Overview>>> {
    let overview = ctx.services.reports.overview().await?;
    Ok(ok("Overview statistics fetched successfully", overview))
}
