//! Services module
//!
//! This module contains business logic services

pub mod checkin;
pub mod help_order;
pub mod mailer;
pub mod plan;
pub mod registration;
pub mod student;

// Re-export commonly used services
pub use checkin::CheckinService;
pub use help_order::HelpOrderService;
pub use mailer::{MailerService, OutboundMessage};
pub use plan::PlanService;
pub use registration::RegistrationService;
pub use student::StudentService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub students: StudentService,
    pub plans: PlanService,
    pub registrations: RegistrationService,
    pub checkins: CheckinService,
    pub help_orders: HelpOrderService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(database: DatabaseService, settings: Settings) -> Result<Self> {
        let mailer = MailerService::new(settings.mailer)?;

        let students = StudentService::new(database.students.clone());
        let plans = PlanService::new(database.plans.clone());
        let registrations = RegistrationService::new(
            database.registrations.clone(),
            database.students.clone(),
            database.plans.clone(),
            mailer.clone(),
        );
        let checkins = CheckinService::new(database.checkins.clone(), database.students.clone());
        let help_orders =
            HelpOrderService::new(database.help_orders, database.students, mailer);

        Ok(Self {
            students,
            plans,
            registrations,
            checkins,
            help_orders,
        })
    }
}
