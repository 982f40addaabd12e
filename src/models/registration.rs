//! Registration model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub reg_id: i64,
    pub student_id: i64,
    pub event_id: i64,
}

/// A registrant of an event, with the student's college
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registrant {
    pub reg_id: i64,
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub college_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterStudentRequest {
    pub student_id: Option<i64>,
}
