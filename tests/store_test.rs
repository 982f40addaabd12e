//! File-backed store: schema creation, seeding and persistence across restarts

use campus_events::database::{
    create_pool, run_migrations, seed_sample_data, DatabaseService, PoolConfig,
};
use tempfile::TempDir;

fn file_config(dir: &TempDir) -> PoolConfig {
    PoolConfig {
        url: format!("sqlite://{}", dir.path().join("campus_events.db").display()),
        ..PoolConfig::default()
    }
}

#[tokio::test]
async fn test_store_survives_restart_and_seeds_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);

    let pool = create_pool(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    assert!(seed_sample_data(&pool).await.unwrap());

    let student_id: i64 = sqlx::query_scalar(
        "INSERT INTO students (name, email, college_id) VALUES ('Late Joiner', 'late.joiner@email.com', 2) RETURNING student_id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let database = DatabaseService::new(pool.clone());
    database.registrations.create(student_id, 1).await.unwrap();
    pool.close().await;

    // Reopen: migrations are a no-op and the seed is skipped
    let pool = create_pool(&config).await.unwrap();
    run_migrations(&pool).await.unwrap();
    assert!(!seed_sample_data(&pool).await.unwrap());

    let colleges: Vec<String> = sqlx::query_scalar("SELECT name FROM colleges ORDER BY college_id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(
        colleges,
        vec!["Computer Science College", "Engineering College", "Business College"]
    );

    let database = DatabaseService::new(pool.clone());
    assert!(database.students.exists(student_id).await.unwrap());
    let college_id: Option<i64> = sqlx::query_scalar("SELECT college_id FROM students WHERE student_id = ?")
        .bind(student_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(college_id, Some(2));
    assert!(database.registrations.exists(student_id, 1).await.unwrap());

    pool.close().await;
}

#[tokio::test]
async fn test_store_enforces_references_and_uniqueness() {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_pool(&file_config(&dir)).await.unwrap();
    run_migrations(&pool).await.unwrap();
    seed_sample_data(&pool).await.unwrap();

    let orphan = sqlx::query("INSERT INTO registrations (student_id, event_id) VALUES (1, 999)")
        .execute(&pool)
        .await;
    assert!(orphan.is_err());

    let duplicate = sqlx::query("INSERT INTO students (name, email, college_id) VALUES ('Copy', 'john.doe@email.com', 1)")
        .execute(&pool)
        .await;
    assert!(duplicate.is_err());

    let bad_status = sqlx::query("INSERT INTO attendance (student_id, event_id, status) VALUES (1, 1, 'late')")
        .execute(&pool)
        .await;
    assert!(bad_status.is_err());

    pool.close().await;
}
