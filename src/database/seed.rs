//! Sample data for a fresh store
//!
//! Seeding runs once at startup and only when no college exists yet.

use tracing::{debug, info};

use crate::database::DatabasePool;
use crate::utils::errors::Result;

const COLLEGES: [&str; 3] = [
    "Computer Science College",
    "Engineering College",
    "Business College",
];

/// (name, email, index into `COLLEGES`)
const STUDENTS: [(&str, &str, usize); 7] = [
    ("John Doe", "john.doe@email.com", 0),
    ("Jane Smith", "jane.smith@email.com", 0),
    ("Mike Johnson", "mike.johnson@email.com", 1),
    ("Sarah Wilson", "sarah.wilson@email.com", 2),
    ("David Brown", "david.brown@email.com", 1),
    ("Emily Davis", "emily.davis@email.com", 0),
    ("Alex Chen", "alex.chen@email.com", 2),
];

/// (title, type, date, index into `COLLEGES`)
const EVENTS: [(&str, &str, &str, usize); 5] = [
    ("Tech Conference 2025", "Conference", "2025-02-15", 0),
    ("Engineering Workshop", "Workshop", "2025-02-20", 1),
    ("Business Seminar", "Seminar", "2025-02-25", 2),
    ("Coding Bootcamp", "Workshop", "2025-03-01", 0),
    ("Hackathon 2025", "Workshop", "2025-09-15", 0),
];

/// Insert the sample colleges, students and events if the store is empty.
///
/// Returns whether anything was inserted. All rows go in one transaction.
pub async fn seed_sample_data(pool: &DatabasePool) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let colleges: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM colleges")
        .fetch_one(&mut *tx)
        .await?;
    if colleges > 0 {
        debug!(colleges = colleges, "Store already populated, skipping sample data");
        return Ok(false);
    }

    let mut college_ids = Vec::with_capacity(COLLEGES.len());
    for name in COLLEGES {
        let id: i64 = sqlx::query_scalar("INSERT INTO colleges (name) VALUES (?) RETURNING college_id")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        college_ids.push(id);
    }

    for (name, email, college) in STUDENTS {
        sqlx::query("INSERT INTO students (name, email, college_id) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(college_ids[college])
            .execute(&mut *tx)
            .await?;
    }

    for (title, event_type, date, college) in EVENTS {
        sqlx::query("INSERT INTO events (title, type, date, college_id) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(event_type)
            .bind(date)
            .bind(college_ids[college])
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        colleges = COLLEGES.len(),
        students = STUDENTS.len(),
        events = EVENTS.len(),
        "Sample data inserted successfully"
    );
    Ok(true)
}
