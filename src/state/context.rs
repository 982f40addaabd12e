//! Application context shared by all request handlers
//!
//! Cloned into every request by axum; the services inside share one
//! connection pool, so cloning is cheap.

use std::sync::Arc;

use crate::config::Settings;
use crate::services::ServiceFactory;

/// Application-wide context containing services and settings
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub services: ServiceFactory,
}

impl AppContext {
    pub fn new(settings: Settings, services: ServiceFactory) -> Self {
        Self {
            settings: Arc::new(settings),
            services,
        }
    }
}
