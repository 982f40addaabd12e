//! Report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event with the number of students registered for it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventPopularity {
    pub event_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub date: NaiveDate,
    pub college_name: String,
    pub registrations: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentParticipation {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub college_name: Option<String>,
    /// Every attendance record, present or absent
    pub events_attended: i64,
    pub events_present: i64,
    pub events_absent: i64,
    pub total_registrations: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopStudent {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub college_name: Option<String>,
    /// Attendance records with status `present`
    pub events_attended: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_events: i64,
    pub total_students: i64,
    pub total_registrations: i64,
    /// Attendance records with status `present`
    pub total_attendance: i64,
    pub total_feedback: i64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopStudentsQuery {
    pub limit: Option<i64>,
}
