//! Event handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::extract::{ApiJson, ApiPath};
use crate::models::event::{CreateEventRequest, Event, EventDetails};
use crate::state::AppContext;
use crate::utils::errors::Result;
use crate::utils::response::{created, ok, ApiResponse};

/// `POST /events`
pub async fn create_event(
    State(ctx): State<AppContext>,
    ApiJson(request): ApiJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>)> {
    let event = ctx.services.events.create_event(request).await?;
    Ok(created("Event created successfully", event))
}

/// `GET /events`
pub async fn list_events(State(ctx): State<AppContext>) -> Result<Json<ApiResponse<Vec<EventDetails>>>> {
    let events = ctx.services.events.list_events().await?;
    Ok(ok("Events fetched successfully", events))
}

/// `GET /events/:id`
pub async fn get_event(
    State(ctx): State<AppContext>,
    ApiPath(event_id): ApiPath<i64>,
) -> Result<Json<ApiResponse<EventDetails>>> {
    let event = ctx.services.events.get_event(event_id).await?;
    Ok(ok("Event fetched successfully", event))
}
