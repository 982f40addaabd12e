//! Aggregate report queries
//!
//! Read-only joins over the junction tables. Each junction is aggregated in
//! its own subquery before being joined, so counts from different tables
//! never multiply each other.

use crate::database::DatabasePool;
use crate::models::report::{EventPopularity, Overview, StudentParticipation, TopStudent};
use crate::utils::errors::CampusError;
use crate::utils::helpers::round_to_two;

#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: DatabasePool,
}

impl ReportRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Every event with its registration count, most registered first.
    ///
    /// Events without registrations are included with a count of 0. Equal
    /// counts keep creation order.
    pub async fn popularity(&self) -> Result<Vec<EventPopularity>, CampusError> {
        let rows = sqlx::query_as::<_, EventPopularity>(
            r#"
            SELECT e.event_id, e.title, e.type, e.date, c.name AS college_name,
                   COUNT(r.reg_id) AS registrations
            FROM events e
            JOIN colleges c ON c.college_id = e.college_id
            LEFT JOIN registrations r ON r.event_id = e.event_id
            GROUP BY e.event_id
            ORDER BY registrations DESC, e.event_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Participation totals for one student, `None` if the student is unknown
    pub async fn student_participation(&self, student_id: i64) -> Result<Option<StudentParticipation>, CampusError> {
        let row = sqlx::query_as::<_, StudentParticipation>(
            r#"
            SELECT s.student_id, s.name, s.email, c.name AS college_name,
                   COALESCE(a.events_attended, 0) AS events_attended,
                   COALESCE(a.events_present, 0) AS events_present,
                   COALESCE(a.events_absent, 0) AS events_absent,
                   COALESCE(r.total_registrations, 0) AS total_registrations
            FROM students s
            LEFT JOIN colleges c ON c.college_id = s.college_id
            LEFT JOIN (
                SELECT student_id,
                       COUNT(*) AS events_attended,
                       SUM(CASE WHEN status = 'present' THEN 1 ELSE 0 END) AS events_present,
                       SUM(CASE WHEN status = 'absent' THEN 1 ELSE 0 END) AS events_absent
                FROM attendance
                GROUP BY student_id
            ) a ON a.student_id = s.student_id
            LEFT JOIN (
                SELECT student_id, COUNT(*) AS total_registrations
                FROM registrations
                GROUP BY student_id
            ) r ON r.student_id = s.student_id
            WHERE s.student_id = ?
            "#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Students with the most `present` attendance records.
    ///
    /// Students who were never present do not appear at all.
    pub async fn top_students(&self, limit: i64) -> Result<Vec<TopStudent>, CampusError> {
        let rows = sqlx::query_as::<_, TopStudent>(
            r#"
            SELECT s.student_id, s.name, s.email, c.name AS college_name,
                   COUNT(a.att_id) AS events_attended
            FROM students s
            JOIN attendance a ON a.student_id = s.student_id AND a.status = 'present'
            LEFT JOIN colleges c ON c.college_id = s.college_id
            GROUP BY s.student_id
            ORDER BY events_attended DESC, s.student_id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Store-wide totals, read inside a single transaction
    pub async fn overview(&self) -> Result<Overview, CampusError> {
        let mut tx = self.pool.begin().await?;

        let total_events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&mut *tx)
            .await?;
        let total_students: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&mut *tx)
            .await?;
        let total_registrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(&mut *tx)
            .await?;
        let total_attendance: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM attendance WHERE status = 'present'")
                .fetch_one(&mut *tx)
                .await?;
        let total_feedback: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&mut *tx)
            .await?;
        let avg_rating: Option<f64> = sqlx::query_scalar("SELECT AVG(rating) FROM feedback")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Overview {
            total_events,
            total_students,
            total_registrations,
            total_attendance,
            total_feedback,
            avg_rating: avg_rating.map(round_to_two).unwrap_or(0.0),
        })
    }
}
