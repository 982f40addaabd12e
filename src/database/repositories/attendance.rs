//! Attendance repository implementation

use crate::database::DatabasePool;
use crate::models::attendance::{AttendanceEntry, AttendanceRecord, AttendanceStatus};
use crate::utils::errors::{CampusError, DuplicateKind};

#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: DatabasePool,
}

impl AttendanceRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Record attendance for a student at an event
    pub async fn create(
        &self,
        student_id: i64,
        event_id: i64,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, CampusError> {
        sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance (student_id, event_id, status)
            VALUES (?, ?, ?)
            RETURNING att_id, student_id, event_id, status
            "#,
        )
        .bind(student_id)
        .bind(event_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CampusError::from_insert(e, DuplicateKind::Attendance, student_id, event_id))
    }

    /// Check if attendance was already recorded
    pub async fn exists(&self, student_id: i64, event_id: i64) -> Result<bool, CampusError> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT att_id FROM attendance WHERE student_id = ? AND event_id = ?",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }

    /// Attendance of an event, by student name
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<AttendanceEntry>, CampusError> {
        let entries = sqlx::query_as::<_, AttendanceEntry>(
            r#"
            SELECT a.att_id, s.student_id, s.name, s.email, a.status, c.name AS college_name
            FROM attendance a
            JOIN students s ON s.student_id = a.student_id
            LEFT JOIN colleges c ON c.college_id = s.college_id
            WHERE a.event_id = ?
            ORDER BY s.name ASC, s.student_id ASC
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
            "SELECT COUNT(*) FROM attendance WHERE student_id = ? AND event_id = ?",
        )
        .bind(student_id)
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
