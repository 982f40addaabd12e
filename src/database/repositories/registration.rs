//! Registration repository implementation

use crate::database::DatabasePool;
use crate::models::registration::{Registrant, Registration};
use crate::utils::errors::{CampusError, DuplicateKind};

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: DatabasePool,
}

impl RegistrationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Register a student for an event
    pub async fn create(&self, student_id: i64, event_id: i64) -> Result<Registration, CampusError> {
        sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (student_id, event_id)
            VALUES (?, ?)
            RETURNING reg_id, student_id, event_id
            "#,
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CampusError::from_insert(e, DuplicateKind::Registration, student_id, event_id))
    }

    /// Check if student is registered for event
    pub async fn exists(&self, student_id: i64, event_id: i64) -> Result<bool, CampusError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT reg_id FROM registrations WHERE student_id = ? AND event_id = ?",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    /// Registrants of an event, by student name
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Registrant>, CampusError> {
        let registrants = sqlx::query_as::<_, Registrant>(
            r#"
            SELECT r.reg_id, s.student_id, s.name, s.email, c.name AS college_name
            FROM registrations r
            JOIN students s ON s.student_id = r.student_id
            LEFT JOIN colleges c ON c.college_id = s.college_id
            WHERE r.event_id = ?
            ORDER BY s.name ASC, s.student_id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(registrants)
    }

    /// Rows stored for one (student, event) pair
    pub async fn count_for_pair(&self, student_id: i64, event_id: i64) -> Result<i64, CampusError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM registrations WHERE student_id = ? AND event_id = ?",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
