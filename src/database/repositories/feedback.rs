//! Feedback repository implementation

use crate::database::DatabasePool;
use crate::models::feedback::{Feedback, FeedbackEntry};
use crate::utils::errors::{CampusError, DuplicateKind};

#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    pool: DatabasePool,
}

impl FeedbackRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Store a rating from a student for an event
    pub async fn create(&self, student_id: i64, event_id: i64, rating: i64) -> Result<Feedback, CampusError> {
        sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (student_id, event_id, rating)
            VALUES (?, ?, ?)
            RETURNING feedback_id, student_id, event_id, rating
            "#,
        )
        .bind(student_id)
        .bind(event_id)
        .bind(rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CampusError::from_insert(e, DuplicateKind::Feedback, student_id, event_id))
    }

    /// Check if feedback was already submitted
    pub async fn exists(&self, student_id: i64, event_id: i64) -> Result<bool, CampusError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT feedback_id FROM feedback WHERE student_id = ? AND event_id = ?",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    /// Feedback of an event, highest rating first
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<FeedbackEntry>, CampusError> {
        let entries = sqlx::query_as::<_, FeedbackEntry>(
            r#"
            SELECT f.feedback_id, s.student_id, s.name, s.email, f.rating, c.name AS college_name
            FROM feedback f
            JOIN students s ON s.student_id = f.student_id
            LEFT JOIN colleges c ON c.college_id = s.college_id
            WHERE f.event_id = ?
            ORDER BY f.rating DESC, f.feedback_id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Rows stored for one (student, event) pair
    pub async fn count_for_pair(&self, student_id: i64, event_id: i64) -> Result<i64, CampusError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM feedback WHERE student_id = ? AND event_id = ?",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
