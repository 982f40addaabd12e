//! Campus Events
//!
//! Main application entry point

use tracing::info;

use campus_events::{
    config::Settings,
    database::{create_pool, run_migrations, seed_sample_data, DatabaseService, PoolConfig},
    server,
    services::ServiceFactory,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", campus_events::info());

    // Initialize database connection
    info!("Connecting to database...");
    let pool = create_pool(&PoolConfig::from(&settings.database)).await?;

    info!("Running database migrations...");
    run_migrations(&pool).await?;

    if settings.database.seed_sample_data {
        seed_sample_data(&pool).await?;
    }

    // Initialize services
    let database = DatabaseService::new(pool.clone());
    let services = ServiceFactory::new(database, &settings);
    let ctx = AppContext::new(settings, services);

    server::serve(ctx).await?;

    pool.close().await;
    info!("Database connections closed");

    Ok(())
}
