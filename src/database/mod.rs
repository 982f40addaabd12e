//! Database module
//!
//! This module handles database connections, schema setup and operations

pub mod connection;
pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used database components
pub use connection::{create_pool, health_check, run_migrations, DatabasePool, PoolConfig};
pub use repositories::{
    AttendanceRepository, CollegeRepository, EventRepository, FeedbackRepository,
    RegistrationRepository, ReportRepository, StudentRepository,
};
pub use seed::seed_sample_data;
pub use service::DatabaseService;
