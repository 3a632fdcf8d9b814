//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the GymBuddy application.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must be held for the lifetime of the process, or the
/// file writer stops flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "gymbuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log rule-layer decisions with structured data
pub fn log_rule_decision(student_id: i64, rule: &str, allowed: bool) {
    if allowed {
        tracing::debug!(student_id = student_id, rule = rule, "Rule check passed");
    } else {
        tracing::info!(student_id = student_id, rule = rule, "Rule check rejected request");
    }
}
