//! State management module
//!
//! This module holds the state handed to every request handler

pub mod context;

pub use context::AppContext;
