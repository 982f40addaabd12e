//! Student repository implementation

use crate::database::DatabasePool;
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: DatabasePool,
}

impl StudentRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Check whether a student exists
    pub async fn exists(&self, id: i64) -> Result<bool, CampusError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT student_id FROM students WHERE student_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}
