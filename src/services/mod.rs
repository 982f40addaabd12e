//! Services module
//!
//! This module contains business logic services

pub mod attendance;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;
pub mod validation;

// Re-export commonly used services
pub use attendance::AttendanceService;
pub use event::EventService;
pub use feedback::FeedbackService;
pub use registration::RegistrationService;
pub use report::ReportService;

use crate::config::settings::Settings;
use crate::database::repositories::{EventRepository, StudentRepository};
use crate::database::DatabaseService;
use crate::utils::errors::{CampusError, Result};

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub events: EventService,
    pub registrations: RegistrationService,
    pub attendance: AttendanceService,
    pub feedback: FeedbackService,
    pub reports: ReportService,
    database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService, settings: &Settings) -> Self {
        Self {
            events: EventService::new(database.events.clone(), database.colleges.clone()),
            registrations: RegistrationService::new(
                database.events.clone(),
                database.students.clone(),
                database.registrations.clone(),
            ),
            attendance: AttendanceService::new(
                database.events.clone(),
                database.students.clone(),
                database.attendance.clone(),
            ),
            feedback: FeedbackService::new(
                database.events.clone(),
                database.students.clone(),
                database.feedback.clone(),
            ),
            reports: ReportService::new(database.reports.clone(), settings.reports.clone()),
            database,
        }
    }

    /// Health check for the backing store
    pub async fn health_check(&self) -> Result<()> {
        self.database.health_check().await
    }
}

/// Existence checks shared by every junction write: event first, then student
pub(crate) async fn ensure_event_and_student(
    events: &EventRepository,
    students: &StudentRepository,
    event_id: i64,
    student_id: i64,
) -> Result<()> {
    if !events.exists(event_id).await? {
        return Err(CampusError::EventNotFound { event_id });
    }

    if !students.exists(student_id).await? {
        return Err(CampusError::StudentNotFound { student_id });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::database::{create_pool, run_migrations, seed_sample_data, PoolConfig};
    use crate::models::{
        AttendanceStatus, CreateEventRequest, MarkAttendanceRequest,
        RegisterStudentRequest, SubmitFeedbackRequest,
    };
    use crate::utils::errors::DuplicateKind;

    async fn setup() -> (ServiceFactory, DatabaseService) {
        let pool = create_pool(&PoolConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        seed_sample_data(&pool).await.unwrap();
        let database = DatabaseService::new(pool);
        (ServiceFactory::new(database.clone(), &Settings::default()), database)
    }

    fn register(student_id: i64) -> RegisterStudentRequest {
        RegisterStudentRequest {
            student_id: Some(student_id),
        }
    }

    fn attend(student_id: i64, status: &str) -> MarkAttendanceRequest {
        MarkAttendanceRequest {
            student_id: Some(student_id),
            status: Some(status.to_string()),
        }
    }

    fn rate(student_id: i64, rating: serde_json::Value) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            student_id: Some(student_id),
            rating: Some(rating),
        }
    }

    #[tokio::test]
    async fn test_create_event_with_unknown_college_inserts_nothing() {
        let (services, _) = setup().await;
        let request = CreateEventRequest {
            title: Some("Orphan".into()),
            event_type: Some("Talk".into()),
            date: Some("2025-06-01".into()),
            college_id: Some(99),
        };

        assert_matches!(
            services.events.create_event(request).await,
            Err(CampusError::CollegeNotFound { college_id: 99 })
        );
        assert_eq!(services.events.list_events().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_registration_checks_run_in_order() {
        let (services, _) = setup().await;

        // Unknown event wins over unknown student
        assert_matches!(
            services.registrations.register_student(42, register(99)).await,
            Err(CampusError::EventNotFound { event_id: 42 })
        );
        assert_matches!(
            services.registrations.register_student(1, register(99)).await,
            Err(CampusError::StudentNotFound { student_id: 99 })
        );
        // Missing payload wins over everything
        assert_matches!(
            services.registrations.register_student(42, RegisterStudentRequest::default()).await,
            Err(CampusError::InvalidInput(_))
        );
    }

    #[tokio::test]
    async fn test_junction_rows_are_unique_per_pair() {
        let (services, database) = setup().await;

        services.registrations.register_student(2, register(3)).await.unwrap();
        assert_matches!(
            services.registrations.register_student(2, register(3)).await,
            Err(CampusError::AlreadyExists { kind: DuplicateKind::Registration, student_id: 3, event_id: 2 })
        );
        assert_eq!(database.registrations.count_for_pair(3, 2).await.unwrap(), 1);

        services.attendance.mark_attendance(2, attend(3, "present")).await.unwrap();
        assert_matches!(
            services.attendance.mark_attendance(2, attend(3, "absent")).await,
            Err(CampusError::AlreadyExists { kind: DuplicateKind::Attendance, .. })
        );
        assert_eq!(database.attendance.count_for_pair(3, 2).await.unwrap(), 1);

        services.feedback.submit_feedback(2, rate(3, json!(4))).await.unwrap();
        assert_matches!(
            services.feedback.submit_feedback(2, rate(3, json!(5))).await,
            Err(CampusError::AlreadyExists { kind: DuplicateKind::Feedback, .. })
        );
        assert_eq!(database.feedback.count_for_pair(3, 2).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unique_constraint_reports_conflict() {
        let (_, database) = setup().await;

        // Bypass the pre-insert check, as a concurrent writer would
        database.registrations.create(1, 1).await.unwrap();
        assert_matches!(
            database.registrations.create(1, 1).await,
            Err(CampusError::AlreadyExists { kind: DuplicateKind::Registration, .. })
        );
        database.attendance.create(1, 1, AttendanceStatus::Absent).await.unwrap();
        assert_matches!(
            database.attendance.create(1, 1, AttendanceStatus::Present).await,
            Err(CampusError::AlreadyExists { kind: DuplicateKind::Attendance, .. })
        );
        database.feedback.create(1, 1, 4).await.unwrap();
        assert_matches!(
            database.feedback.create(1, 1, 2).await,
            Err(CampusError::AlreadyExists { kind: DuplicateKind::Feedback, student_id: 1, event_id: 1 })
        );
        assert_eq!(database.feedback.count_for_pair(1, 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_feedback_summary() {
        let (services, _) = setup().await;

        let empty = services.feedback.list_feedback(1).await.unwrap();
        assert_eq!(empty.average_rating, 0.0);
        assert_eq!(empty.total_responses, 0);

        for (student_id, rating) in [(1, 5), (2, 3), (3, 4)] {
            services.feedback.submit_feedback(1, rate(student_id, json!(rating))).await.unwrap();
        }

        let summary = services.feedback.list_feedback(1).await.unwrap();
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.total_responses, 3);
        let ratings: Vec<i64> = summary.feedback.iter().map(|f| f.rating).collect();
        assert_eq!(ratings, vec![5, 4, 3]);
    }

    #[tokio::test]
    async fn test_participation_counts_are_not_multiplied() {
        let (services, _) = setup().await;

        for event_id in 1..=3 {
            services.registrations.register_student(event_id, register(1)).await.unwrap();
        }
        services.attendance.mark_attendance(1, attend(1, "present")).await.unwrap();
        services.attendance.mark_attendance(2, attend(1, "absent")).await.unwrap();

        let row = services.reports.student_participation(1).await.unwrap();
        assert_eq!(row.events_attended, 2);
        assert_eq!(row.events_present, 1);
        assert_eq!(row.events_absent, 1);
        assert_eq!(row.total_registrations, 3);
        assert_eq!(row.college_name.as_deref(), Some("Computer Science College"));

        assert_matches!(
            services.reports.student_participation(77).await,
            Err(CampusError::StudentNotFound { student_id: 77 })
        );
    }

    #[tokio::test]
    async fn test_students_without_college_still_reported() {
        let (services, database) = setup().await;
        let student_id: i64 = sqlx::query_scalar(
            "INSERT INTO students (name, email, college_id) VALUES ('Visiting Scholar', 'visitor@email.com', NULL) RETURNING student_id",
        )
        .fetch_one(database.pool())
        .await
        .unwrap();

        services
            .registrations
            .register_student(1, register(student_id))
            .await
            .unwrap();
        services
            .attendance
            .mark_attendance(1, attend(student_id, "present"))
            .await
            .unwrap();

        let registrants = services.registrations.list_registrations(1).await.unwrap();
        assert_eq!(registrants.len(), 1);
        assert_eq!(registrants[0].college_name, None);

        let top = services.reports.top_students(None).await.unwrap();
        assert_eq!(top[0].student_id, student_id);
    }

    #[tokio::test]
    async fn test_overview_average_is_rounded() {
        let (services, _) = setup().await;

        for (student_id, rating) in [(1, 5), (2, 4), (3, 4)] {
            services.feedback.submit_feedback(2, rate(student_id, json!(rating))).await.unwrap();
        }

        let overview = services.reports.overview().await.unwrap();
        assert_eq!(overview.total_feedback, 3);
        assert_eq!(overview.avg_rating, 4.33);
    }

    #[tokio::test]
    async fn test_overview_on_fresh_seed() {
        let (services, _) = setup().await;
        let overview = services.reports.overview().await.unwrap();

        assert_eq!(overview.total_events, 5);
        assert_eq!(overview.total_students, 7);
        assert_eq!(overview.total_registrations, 0);
        assert_eq!(overview.total_attendance, 0);
        assert_eq!(overview.total_feedback, 0);
        assert_eq!(overview.avg_rating, 0.0);
        services.health_check().await.unwrap();
    }
}
