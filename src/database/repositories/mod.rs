//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod attendance;
pub mod college;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;
pub mod student;

// Re-export repositories
pub use attendance::AttendanceRepository;
pub use college::CollegeRepository;
pub use event::EventRepository;
pub use feedback::FeedbackRepository;
pub use registration::RegistrationRepository;
pub use report::ReportRepository;
pub use student::StudentRepository;
