//! Registration, attendance and feedback endpoints

mod helpers;

use axum::http::StatusCode;
use helpers::*;
use serde_json::json;

#[tokio::test]
async fn test_register_once_then_conflict() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/events/1/register", registration(2)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Student registered successfully");
    assert_eq!(body["data"]["student_id"], 2);
    assert_eq!(body["data"]["event_id"], 1);
    assert!(body["data"]["reg_id"].is_i64());

    let (status, body) = app.post("/events/1/register", registration(2)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Student is already registered for this event");

    let (status, body) = app.get("/events/1/registrations").await;
    assert_eq!(status, StatusCode::OK);
    let registrants = body["data"].as_array().unwrap();
    assert_eq!(registrants.len(), 1);
    assert_eq!(registrants[0]["name"], "Jane Smith");
    assert_eq!(registrants[0]["college_name"], COMPUTER_SCIENCE_COLLEGE);
}

#[tokio::test]
async fn test_register_lookup_order() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/events/99/register", registration(99)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Event not found");

    let (status, body) = app.post("/events/1/register", registration(99)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student not found");

    let (status, body) = app.post("/events/99/register", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field: student_id");
}

#[tokio::test]
async fn test_listing_unknown_event_is_empty() {
    let app = TestApp::new().await;

    for path in ["/events/42/registrations", "/events/42/attendance"] {
        let (status, body) = app.get(path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body["data"], json!([]));
    }

    let (status, body) = app.get("/events/42/feedback").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_responses"], 0);
}

#[tokio::test]
async fn test_attendance_status_rules() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/events/2/attendance", attendance(3, "late")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Status must be either \"present\" or \"absent\"");

    let (status, body) = app.post("/events/2/attendance", json!({ "student_id": 3 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields: student_id, status");

    let (status, body) = app.post("/events/2/attendance", attendance(3, "absent")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Attendance marked successfully");
    assert_eq!(body["data"]["status"], "absent");

    let (status, body) = app.post("/events/2/attendance", attendance(3, "present")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Attendance already marked for this student");

    let (_, body) = app.get("/events/2/attendance").await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["status"], "absent");
    assert_eq!(entries[0]["name"], "Mike Johnson");
}

#[tokio::test]
async fn test_feedback_rating_rules() {
    let app = TestApp::new().await;

    for rejected in [json!(0), json!(6), json!(4.5), json!("5")] {
        let (status, body) = app.post("/events/3/feedback", feedback(1, rejected.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", rejected);
        assert_eq!(body["message"], "Rating must be an integer between 1 and 5");
    }

    let (status, body) = app.post("/events/3/feedback", json!({ "student_id": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields: student_id, rating");

    let (status, body) = app.post("/events/3/feedback", feedback(1, json!(5))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Feedback submitted successfully");
    assert_eq!(body["data"]["rating"], 5);

    let (status, body) = app.post("/events/3/feedback", feedback(1, json!(2))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Feedback already submitted for this event");
}

#[tokio::test]
async fn test_feedback_summary() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/events/4/feedback").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["feedback"], json!([]));
    assert_eq!(body["data"]["average_rating"], 0.0);
    assert_eq!(body["data"]["total_responses"], 0);

    for (student_id, rating) in [(1, 5), (2, 4), (3, 4)] {
        let (status, _) = app.post("/events/4/feedback", feedback(student_id, json!(rating))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = app.get("/events/4/feedback").await;
    assert_eq!(body["data"]["average_rating"], 4.33);
    assert_eq!(body["data"]["total_responses"], 3);
    assert_eq!(body["data"]["feedback"][0]["rating"], 5);
}
