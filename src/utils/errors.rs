//! Error handling for the campus events API
//!
//! This module defines the main error type used throughout the application
//! and how each failure is rendered as an HTTP response envelope.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::utils::response::ApiResponse;

/// Main error type for the campus events application
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("College not found: {college_id}")]
    CollegeNotFound { college_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: i64 },

    #[error("Duplicate {kind}: student {student_id}, event {event_id}")]
    AlreadyExists {
        kind: DuplicateKind,
        student_id: i64,
        event_id: i64,
    },
}

/// The junction tables that allow at most one row per (student, event)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    Registration,
    Attendance,
    Feedback,
}

impl DuplicateKind {
    fn conflict_message(&self) -> &'static str {
        match self {
            DuplicateKind::Registration => "Student is already registered for this event",
            DuplicateKind::Attendance => "Attendance already marked for this student",
            DuplicateKind::Feedback => "Feedback already submitted for this event",
        }
    }
}

impl std::fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateKind::Registration => write!(f, "registration"),
            DuplicateKind::Attendance => write!(f, "attendance"),
            DuplicateKind::Feedback => write!(f, "feedback"),
        }
    }
}

/// Result type alias for campus events operations
pub type Result<T> = std::result::Result<T, CampusError>;

impl CampusError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            CampusError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            // The college is named in the request body, so an unknown one is a bad request
            CampusError::CollegeNotFound { .. } => StatusCode::BAD_REQUEST,
            CampusError::EventNotFound { .. } => StatusCode::NOT_FOUND,
            CampusError::StudentNotFound { .. } => StatusCode::NOT_FOUND,
            CampusError::AlreadyExists { .. } => StatusCode::CONFLICT,
            CampusError::Database(_)
            | CampusError::Migration(_)
            | CampusError::ConfigLoad(_)
            | CampusError::Config(_)
            | CampusError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope
    pub fn public_message(&self) -> String {
        match self {
            CampusError::InvalidInput(message) => message.clone(),
            CampusError::CollegeNotFound { .. } => "College not found".to_string(),
            CampusError::EventNotFound { .. } => "Event not found".to_string(),
            CampusError::StudentNotFound { .. } => "Student not found".to_string(),
            CampusError::AlreadyExists { kind, .. } => kind.conflict_message().to_string(),
            CampusError::Database(_) | CampusError::Migration(_) => "Database error".to_string(),
            CampusError::ConfigLoad(_) | CampusError::Config(_) | CampusError::Io(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CampusError::Database(_) => ErrorSeverity::Critical,
            CampusError::Migration(_) => ErrorSeverity::Critical,
            CampusError::ConfigLoad(_) | CampusError::Config(_) => ErrorSeverity::Critical,
            CampusError::Io(_) => ErrorSeverity::Error,
            CampusError::AlreadyExists { .. } => ErrorSeverity::Warning,
            CampusError::InvalidInput(_)
            | CampusError::CollegeNotFound { .. }
            | CampusError::EventNotFound { .. }
            | CampusError::StudentNotFound { .. } => ErrorSeverity::Info,
        }
    }

    /// Translate a failed insert, turning a unique-constraint hit into a conflict
    pub fn from_insert(err: sqlx::Error, kind: DuplicateKind, student_id: i64, event_id: i64) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => CampusError::AlreadyExists {
                kind,
                student_id,
                event_id,
            },
            _ => CampusError::Database(err),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Internal detail of a server-side failure.
///
/// Attached to 5xx responses as an extension; the error-detail middleware
/// decides whether it reaches the client.
#[derive(Debug, Clone)]
pub struct ErrorDetail {
    pub message: String,
    pub detail: String,
}

impl IntoResponse for CampusError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.public_message();

        match self.severity() {
            ErrorSeverity::Info => debug!(status = status.as_u16(), error = %self, "Request rejected"),
            ErrorSeverity::Warning => warn!(status = status.as_u16(), error = %self, "Request conflicted"),
            severity => error!(status = status.as_u16(), severity = %severity, error = %self, "Request failed"),
        }

        let mut response = (status, Json(ApiResponse::<()>::failure(message.clone()))).into_response();
        if status.is_server_error() {
            let detail = match &self {
                CampusError::Database(err) => err.to_string(),
                other => other.to_string(),
            };
            response.extensions_mut().insert(ErrorDetail { message, detail });
        }
        response
    }
}

impl From<JsonRejection> for CampusError {
    fn from(rejection: JsonRejection) -> Self {
        CampusError::InvalidInput(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for CampusError {
    fn from(rejection: PathRejection) -> Self {
        CampusError::InvalidInput(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for CampusError {
    fn from(rejection: QueryRejection) -> Self {
        CampusError::InvalidInput(format!("Invalid query string: {}", rejection.body_text()))
    }
}
