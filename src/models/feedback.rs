//! Feedback model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub feedback_id: i64,
    pub student_id: i64,
    pub event_id: i64,
    pub rating: i64,
}

/// A feedback row joined with the student and their college
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackEntry {
    pub feedback_id: i64,
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub rating: i64,
    pub college_name: Option<String>,
}

/// All feedback for one event together with its aggregate rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub feedback: Vec<FeedbackEntry>,
    pub average_rating: f64,
    pub total_responses: i64,
}

/// Body of `POST /events/:id/feedback`.
///
/// The rating is kept as raw JSON so that fractional and non-numeric values
/// are reported as validation failures rather than body parse errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub student_id: Option<i64>,
    pub rating: Option<serde_json::Value>,
}
