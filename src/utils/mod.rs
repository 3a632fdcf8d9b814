//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, and date helpers.

pub mod dates;
pub mod errors;
pub mod logging;

pub use errors::{GymBuddyError, Result};
