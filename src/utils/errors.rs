//! Error handling for GymBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for GymBuddy application
#[derive(Error, Debug)]
pub enum GymBuddyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation fails: {0}")]
    Validation(String),

    #[error("Student not found")]
    StudentNotFound { student_id: i64 },

    #[error("Plan not found")]
    PlanNotFound { plan_id: i64 },

    #[error("Registration not found")]
    RegistrationNotFound { registration_id: i64 },

    #[error("Help order not found")]
    HelpOrderNotFound { order_id: i64 },

    #[error("No checkins found for this student")]
    NoCheckinsFound { student_id: i64 },

    #[error("Student already has a registration")]
    AlreadyRegistered { student_id: i64 },

    #[error("Past dates are not permitted")]
    PastStartDate,

    #[error("Registrations that already started cannot be updated")]
    AlreadyStarted,

    #[error("Today's checkin has already been done")]
    AlreadyCheckedInToday,

    #[error("Maximum of 5 checkins within 7 days reached")]
    TooManyCheckins,

    #[error("Mail gateway error: {0}")]
    Mail(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for GymBuddy operations
pub type Result<T> = std::result::Result<T, GymBuddyError>;

impl GymBuddyError {
    /// Check if the error represents a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GymBuddyError::StudentNotFound { .. }
                | GymBuddyError::PlanNotFound { .. }
                | GymBuddyError::RegistrationNotFound { .. }
                | GymBuddyError::HelpOrderNotFound { .. }
                | GymBuddyError::NoCheckinsFound { .. }
        )
    }

    /// Check if the error was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        match self {
            GymBuddyError::Validation(_)
            | GymBuddyError::AlreadyRegistered { .. }
            | GymBuddyError::PastStartDate
            | GymBuddyError::AlreadyStarted
            | GymBuddyError::AlreadyCheckedInToday
            | GymBuddyError::TooManyCheckins => true,
            _ => self.is_not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(GymBuddyError::StudentNotFound { student_id: 1 }.is_not_found());
        assert!(GymBuddyError::NoCheckinsFound { student_id: 1 }.is_not_found());
        assert!(!GymBuddyError::PastStartDate.is_not_found());
        assert!(!GymBuddyError::Config("missing".to_string()).is_not_found());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(GymBuddyError::TooManyCheckins.is_client_error());
        assert!(GymBuddyError::AlreadyRegistered { student_id: 3 }.is_client_error());
        assert!(GymBuddyError::PlanNotFound { plan_id: 9 }.is_client_error());
        assert!(!GymBuddyError::Config("bad".to_string()).is_client_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GymBuddyError::PastStartDate.to_string(),
            "Past dates are not permitted"
        );
        assert_eq!(
            GymBuddyError::AlreadyCheckedInToday.to_string(),
            "Today's checkin has already been done"
        );
    }
}
