//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod checkin;
pub mod help_order;
pub mod plan;
pub mod registration;
pub mod student;

// Re-export repositories
pub use checkin::CheckinRepository;
pub use help_order::HelpOrderRepository;
pub use plan::PlanRepository;
pub use registration::RegistrationRepository;
pub use student::StudentRepository;
