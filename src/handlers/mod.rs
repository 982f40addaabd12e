//! Request handlers module
//!
//! This module contains the HTTP handlers and the router that dispatches to them

pub mod attendance;
pub mod events;
pub mod extract;
pub mod feedback;
pub mod meta;
pub mod registrations;
pub mod reports;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppContext;

/// Routes mounted under `/events`
pub fn event_routes() -> Router<AppContext> {
    Router::new()
        .route("/", post(events::create_event).get(events::list_events))
        .route("/:id", get(events::get_event))
        .route("/:id/register", post(registrations::register_student))
        .route("/:id/registrations", get(registrations::list_registrations))
        .route(
            "/:id/attendance",
            post(attendance::mark_attendance).get(attendance::list_attendance),
        )
        .route(
            "/:id/feedback",
            post(feedback::submit_feedback).get(feedback::list_feedback),
        )
}

/// Routes mounted under `/reports`
pub fn report_routes() -> Router<AppContext> {
    Router::new()
        .route("/popularity", get(reports::popularity))
        .route("/student/:id", get(reports::student_participation))
        .route("/top-students", get(reports::top_students))
        .route("/overview", get(reports::overview))
}
