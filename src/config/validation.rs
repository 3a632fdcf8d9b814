//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{GymBuddyError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_mailer_config(&settings.mailer)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(GymBuddyError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(GymBuddyError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(GymBuddyError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(GymBuddyError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(GymBuddyError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate mail gateway configuration
fn validate_mailer_config(config: &super::MailerConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(GymBuddyError::Config(
            "Mail gateway URL is required".to_string(),
        ));
    }

    if !config.sender_email.contains('@') {
        return Err(GymBuddyError::Config(
            "Mail sender address must be a valid email".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(GymBuddyError::Config(
            "Mail gateway timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(GymBuddyError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(GymBuddyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let mut settings = Settings::default();
        settings.database.url = String::new();
        assert_matches!(
            validate_settings(&settings),
            Err(GymBuddyError::Config(msg)) if msg.contains("Database URL")
        );
    }

    #[test]
    fn test_connection_bounds_are_checked() {
        let mut settings = Settings::default();
        settings.database.max_connections = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.database.min_connections = 20;
        settings.database.max_connections = 10;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_mailer_sender_must_be_email() {
        let mut settings = Settings::default();
        settings.mailer.sender_email = "not-an-address".to_string();
        assert_matches!(
            validate_settings(&settings),
            Err(GymBuddyError::Config(msg)) if msg.contains("sender")
        );
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
