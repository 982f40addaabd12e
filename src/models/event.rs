//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    pub college_id: i64,
}

/// Event joined with the name of its college
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDetails {
    pub event_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    pub college_id: i64,
    pub college_name: String,
}

/// Body of `POST /events`; every field is checked by the event service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub date: Option<String>,
    pub college_id: Option<i64>,
}

/// A validated event ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub event_type: String,
    pub date: NaiveDate,
    pub college_id: i64,
}
