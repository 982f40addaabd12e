//! College repository implementation

use crate::database::DatabasePool;
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct CollegeRepository {
    pool: DatabasePool,
}

impl CollegeRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Check whether a college exists
    pub async fn exists(&self, id: i64) -> Result<bool, CampusError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT college_id FROM colleges WHERE college_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}
