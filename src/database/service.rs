//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    CheckinRepository, DatabasePool, HelpOrderRepository, PlanRepository, RegistrationRepository,
    StudentRepository,
};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub students: StudentRepository,
    pub plans: PlanRepository,
    pub registrations: RegistrationRepository,
    pub checkins: CheckinRepository,
    pub help_orders: HelpOrderRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            students: StudentRepository::new(pool.clone()),
            plans: PlanRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            checkins: CheckinRepository::new(pool.clone()),
            help_orders: HelpOrderRepository::new(pool),
        }
    }
}
