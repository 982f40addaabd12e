//! Middleware module
//!
//! This module contains middleware for request processing

pub mod errors;
pub mod logging;
pub mod timeout;

// Re-export commonly used middleware
pub use errors::{attach_error_detail, handle_panic};
pub use logging::log_requests;
pub use timeout::enforce_timeout;
