//! GymBuddy Membership API
//!
//! A gym membership management service. This library provides modular
//! components for student and plan administration, enrollment with
//! date/price rules, rate-limited daily check-ins, and a help order
//! workflow with mail notifications.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod http;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{GymBuddyError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
