//! Test data helpers for building request payloads
//!
//! Ids refer to the sample data inserted on startup: colleges 1..=3,
//! students 1..=7 and events 1..=5.

use serde_json::{json, Value};

pub const COMPUTER_SCIENCE_COLLEGE: &str = "Computer Science College";
pub const SEEDED_EVENTS: usize = 5;
pub const SEEDED_STUDENTS: i64 = 7;

pub fn new_event(title: &str, event_type: &str, date: &str, college_id: i64) -> Value {
    json!({
        "title": title,
        "type": event_type,
        "date": date,
        "college_id": college_id,
    })
}

pub fn registration(student_id: i64) -> Value {
    json!({ "student_id": student_id })
}

pub fn attendance(student_id: i64, status: &str) -> Value {
    json!({ "student_id": student_id, "status": status })
}

pub fn feedback(student_id: i64, rating: Value) -> Value {
    json!({ "student_id": student_id, "rating": rating })
}
