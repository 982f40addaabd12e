//! Event repository implementation

use crate::database::DatabasePool;
use crate::models::event::{Event, EventDetails, NewEvent};
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: DatabasePool,
}

impl EventRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, event: NewEvent) -> Result<Event, CampusError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, type, date, college_id)
            VALUES (?, ?, ?, ?)
            RETURNING event_id, title, type, date, college_id
            "#,
        )
        .bind(event.title)
        .bind(event.event_type)
        .bind(event.date)
        .bind(event.college_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID, joined with its college
    pub async fn find_by_id(&self, id: i64) -> Result<Option<EventDetails>, CampusError> {
        let event = sqlx::query_as::<_, EventDetails>(
            r#"
            SELECT e.event_id, e.title, e.type, e.date, e.college_id, c.name AS college_name
            FROM events e
            JOIN colleges c ON c.college_id = e.college_id
            WHERE e.event_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// List all events, latest date first
    pub async fn list(&self) -> Result<Vec<EventDetails>, CampusError> {
        let events = sqlx::query_as::<_, EventDetails>(
            r#"
            SELECT e.event_id, e.title, e.type, e.date, e.college_id, c.name AS college_name
            FROM events e
            JOIN colleges c ON c.college_id = e.college_id
            ORDER BY e.date DESC, e.event_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Check whether an event exists
    pub async fn exists(&self, id: i64) -> Result<bool, CampusError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT event_id FROM events WHERE event_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}
