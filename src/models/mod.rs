//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod checkin;
pub mod help_order;
pub mod plan;
pub mod registration;
pub mod student;

// Re-export commonly used models
pub use checkin::{Checkin, CheckinView, CheckinWithStudent};
pub use help_order::{
    AnswerHelpOrderRequest, AskHelpOrderRequest, HelpOrder, HelpOrderView, HelpOrderWithStudent,
};
pub use plan::{CreatePlanRequest, Plan, PlanSummary, UpdatePlanRequest};
pub use registration::{
    CreateRegistrationRequest, Registration, RegistrationView, RegistrationWithDetails,
    UpdateRegistrationRequest,
};
pub use student::{CreateStudentRequest, Student, StudentSummary, UpdateStudentRequest};
