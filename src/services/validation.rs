//! Request payload validation
//!
//! Checks run before any store access; every failure is `InvalidInput`.

use chrono::NaiveDate;
use serde_json::Value;

use crate::models::attendance::{AttendanceStatus, MarkAttendanceRequest};
use crate::models::event::{CreateEventRequest, NewEvent};
use crate::models::feedback::SubmitFeedbackRequest;
use crate::models::registration::RegisterStudentRequest;
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::non_blank;

pub const EVENT_FIELDS_MISSING: &str = "Missing required fields: title, type, date, college_id";
pub const EVENT_DATE_INVALID: &str = "Date must be a valid calendar date in YYYY-MM-DD format";
pub const STUDENT_ID_MISSING: &str = "Missing required field: student_id";
pub const ATTENDANCE_FIELDS_MISSING: &str = "Missing required fields: student_id, status";
pub const STATUS_INVALID: &str = "Status must be either \"present\" or \"absent\"";
pub const FEEDBACK_FIELDS_MISSING: &str = "Missing required fields: student_id, rating";
pub const RATING_INVALID: &str = "Rating must be an integer between 1 and 5";

/// Validate the body of an event creation request
pub fn validate_new_event(request: CreateEventRequest) -> Result<NewEvent> {
    let (Some(title), Some(event_type), Some(date), Some(college_id)) = (
        non_blank(request.title),
        non_blank(request.event_type),
        non_blank(request.date),
        request.college_id,
    ) else {
        return Err(CampusError::InvalidInput(EVENT_FIELDS_MISSING.to_string()));
    };

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| CampusError::InvalidInput(EVENT_DATE_INVALID.to_string()))?;

    Ok(NewEvent {
        title,
        event_type,
        date,
        college_id,
    })
}

/// Student id of a registration request
pub fn validate_registration(request: RegisterStudentRequest) -> Result<i64> {
    request
        .student_id
        .ok_or_else(|| CampusError::InvalidInput(STUDENT_ID_MISSING.to_string()))
}

/// Student id and status of an attendance request
pub fn validate_attendance(request: MarkAttendanceRequest) -> Result<(i64, AttendanceStatus)> {
    let (Some(student_id), Some(status)) = (request.student_id, non_blank(request.status)) else {
        return Err(CampusError::InvalidInput(ATTENDANCE_FIELDS_MISSING.to_string()));
    };

    let status = status
        .parse::<AttendanceStatus>()
        .map_err(|_| CampusError::InvalidInput(STATUS_INVALID.to_string()))?;

    Ok((student_id, status))
}

/// Student id and rating of a feedback request
pub fn validate_feedback(request: SubmitFeedbackRequest) -> Result<(i64, i64)> {
    let (Some(student_id), Some(rating)) = (request.student_id, request.rating) else {
        return Err(CampusError::InvalidInput(FEEDBACK_FIELDS_MISSING.to_string()));
    };

    Ok((student_id, parse_rating(&rating)?))
}

/// Accept integral JSON numbers in `1..=5`; `4.0` counts as integral, `"4"` does not
pub fn parse_rating(value: &Value) -> Result<i64> {
    let rating = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        _ => None,
    };

    match rating {
        Some(rating) if (1..=5).contains(&rating) => Ok(rating),
        _ => Err(CampusError::InvalidInput(RATING_INVALID.to_string())),
    }
}
