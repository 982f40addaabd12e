//! Database service layer
//!
//! This module bundles the repositories that share one connection pool

use crate::database::{
    connection, AttendanceRepository, CollegeRepository, DatabasePool, EventRepository,
    FeedbackRepository, RegistrationRepository, ReportRepository, StudentRepository,
};
use crate::utils::errors::CampusError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub colleges: CollegeRepository,
    pub students: StudentRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    pub attendance: AttendanceRepository,
    pub feedback: FeedbackRepository,
    pub reports: ReportRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            colleges: CollegeRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            attendance: AttendanceRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool.clone()),
            reports: ReportRepository::new(pool.clone()),
            pool,
        }
    }

    /// The pool every repository draws from
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Check that the store answers queries
    pub async fn health_check(&self) -> Result<(), CampusError> {
        connection::health_check(&self.pool).await
    }
}
