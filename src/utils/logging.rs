//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the campus events service.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::utils::errors::{CampusError, Result};

/// Initialize logging based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured the returned guard must be kept alive for the
/// file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CampusError::Config(format!("Invalid log filter: {e}")))?;

    let stdout_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.format == "json" {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "campus-events.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init()
        .map_err(|e| CampusError::Config(format!("Failed to install logger: {e}")))?;

    info!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(guard)
}

/// Log a write against one of the student/event junction tables
pub fn log_participation_write(operation: &str, student_id: i64, event_id: i64, row_id: i64) {
    info!(
        operation = operation,
        student_id = student_id,
        event_id = event_id,
        row_id = row_id,
        "Participation recorded"
    );
}

/// Log a write that was refused before reaching the store
pub fn log_rejected_write(operation: &str, student_id: i64, event_id: i64, reason: &str) {
    warn!(
        operation = operation,
        student_id = student_id,
        event_id = event_id,
        reason = reason,
        "Participation write rejected"
    );
}

/// Log report generation
pub fn log_report(report: &str, rows: usize) {
    debug!(report = report, rows = rows, "Report generated");
}
