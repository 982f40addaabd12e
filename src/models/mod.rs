//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod attendance;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;

// Re-export commonly used models
pub use attendance::{AttendanceEntry, AttendanceRecord, AttendanceStatus, MarkAttendanceRequest};
pub use event::{CreateEventRequest, Event, EventDetails, NewEvent};
pub use feedback::{Feedback, FeedbackEntry, FeedbackSummary, SubmitFeedbackRequest};
pub use registration::{RegisterStudentRequest, Registrant, Registration};
pub use report::{EventPopularity, Overview, StudentParticipation, TopStudent, TopStudentsQuery};
