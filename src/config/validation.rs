//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{CampusError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;
    validate_reports_config(&settings.reports)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(CampusError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(CampusError::Config("Server port must be greater than 0".to_string()));
    }

    let valid_environments = ["development", "production", "test"];
    if !valid_environments.contains(&config.environment.as_str()) {
        return Err(CampusError::Config(format!(
            "Invalid environment: {}. Valid environments: {:?}",
            config.environment, valid_environments
        )));
    }

    if config.request_timeout_seconds == 0 {
        return Err(CampusError::Config(
            "Request timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(CampusError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(CampusError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(CampusError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(CampusError::Config(format!(
            "Invalid log format: {}. Valid formats: {:?}",
            config.format, valid_formats
        )));
    }

    Ok(())
}

/// Validate report configuration
fn validate_reports_config(config: &super::ReportsConfig) -> Result<()> {
    if config.max_top_students < 1 {
        return Err(CampusError::Config(
            "Max top students must be at least 1".to_string(),
        ));
    }

    if config.top_students_limit < 1 || config.top_students_limit > config.max_top_students {
        return Err(CampusError::Config(format!(
            "Top students limit must be between 1 and {}",
            config.max_top_students
        )));
    }

    Ok(())
}
