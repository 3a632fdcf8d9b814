//! Registration service implementation
//!
//! This service enforces the enrollment business rules: one registration per
//! student, no past start dates, no amendments once a plan has started. End
//! date and total price are derived from the plan at write time and frozen
//! on the registration row.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::database::repositories::{PlanRepository, RegistrationRepository, StudentRepository};
use crate::models::plan::Plan;
use crate::models::registration::{
    CreateRegistrationRequest, Registration, RegistrationView, UpdateRegistrationRequest,
};
use crate::models::student::Student;
use crate::services::mailer::MailerService;
use crate::utils::dates;
use crate::utils::errors::{GymBuddyError, Result};
use crate::utils::logging::log_rule_decision;

/// Compute a registration's end date and total price from a plan
///
/// The end date advances the start by the plan's duration in whole calendar
/// months; the total price is the monthly price times the duration.
pub fn registration_schedule(
    start_date: DateTime<Utc>,
    duration: i32,
    monthly_price: f64,
) -> Result<(DateTime<Utc>, f64)> {
    if duration <= 0 {
        return Err(GymBuddyError::Validation(
            "Plan duration must be at least one month".to_string(),
        ));
    }

    let end_date = dates::add_months(start_date, duration as u32)
        .ok_or_else(|| GymBuddyError::Validation("Start date is out of range".to_string()))?;

    Ok((end_date, monthly_price * f64::from(duration)))
}

/// Registration service for enrollment management
#[derive(Debug, Clone)]
pub struct RegistrationService {
    registrations: RegistrationRepository,
    students: StudentRepository,
    plans: PlanRepository,
    mailer: MailerService,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(
        registrations: RegistrationRepository,
        students: StudentRepository,
        plans: PlanRepository,
        mailer: MailerService,
    ) -> Self {
        Self {
            registrations,
            students,
            plans,
            mailer,
        }
    }

    /// Enroll a student into a plan
    pub async fn enroll(&self, request: CreateRegistrationRequest) -> Result<Registration> {
        debug!(student_id = request.student_id, plan_id = request.plan_id, "Enrolling student");

        let student = self
            .students
            .find_by_id(request.student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound {
                student_id: request.student_id,
            })?;

        // Any prior registration blocks a new one, regardless of its dates
        if self
            .registrations
            .find_by_student(request.student_id)
            .await?
            .is_some()
        {
            log_rule_decision(request.student_id, "one_registration_per_student", false);
            return Err(GymBuddyError::AlreadyRegistered {
                student_id: request.student_id,
            });
        }

        let plan = self
            .plans
            .find_by_id(request.plan_id)
            .await?
            .ok_or(GymBuddyError::PlanNotFound {
                plan_id: request.plan_id,
            })?;

        let start_date = dates::start_of_hour(request.start_date);
        if start_date < Utc::now() {
            log_rule_decision(request.student_id, "no_past_start_date", false);
            return Err(GymBuddyError::PastStartDate);
        }

        let (end_date, price) = registration_schedule(start_date, plan.duration, plan.price)?;

        let registration = self
            .registrations
            .create(student.id, plan.id, start_date, end_date, price)
            .await?;

        info!(
            registration_id = registration.id,
            student_id = student.id,
            plan_id = plan.id,
            price = price,
            "Student enrolled successfully"
        );

        self.send_registration_mail(&student, &plan, &registration, true).await;

        Ok(registration)
    }

    /// Amend a registration's plan and start date
    ///
    /// Blocked entirely once the current start date has elapsed.
    pub async fn amend(&self, request: UpdateRegistrationRequest) -> Result<Registration> {
        debug!(registration_id = request.id, plan_id = request.plan_id, "Amending registration");

        let registration = self.registrations.find_by_id(request.id).await?.ok_or(
            GymBuddyError::RegistrationNotFound {
                registration_id: request.id,
            },
        )?;

        let plan = self
            .plans
            .find_by_id(request.plan_id)
            .await?
            .ok_or(GymBuddyError::PlanNotFound {
                plan_id: request.plan_id,
            })?;

        if registration.start_date <= Utc::now() {
            log_rule_decision(registration.student_id, "no_amending_started_plan", false);
            return Err(GymBuddyError::AlreadyStarted);
        }

        let start_date = dates::start_of_hour(request.start_date);
        if start_date < Utc::now() {
            log_rule_decision(registration.student_id, "no_past_start_date", false);
            return Err(GymBuddyError::PastStartDate);
        }

        let (end_date, price) = registration_schedule(start_date, plan.duration, plan.price)?;

        let updated = self
            .registrations
            .update(registration.id, plan.id, start_date, end_date, price)
            .await?;

        info!(
            registration_id = updated.id,
            plan_id = plan.id,
            price = price,
            "Registration amended successfully"
        );

        let student = self
            .students
            .find_by_id(registration.student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound {
                student_id: registration.student_id,
            })?;

        self.send_registration_mail(&student, &plan, &updated, false).await;

        Ok(updated)
    }

    /// Remove a registration (hard delete)
    pub async fn remove(&self, registration_id: i64) -> Result<()> {
        let registration = self.registrations.find_by_id(registration_id).await?.ok_or(
            GymBuddyError::RegistrationNotFound { registration_id },
        )?;

        self.registrations.delete(registration.id).await?;
        info!(registration_id = registration.id, "Registration removed");

        Ok(())
    }

    /// List all registrations with embedded summaries, newest first
    pub async fn list(&self) -> Result<Vec<RegistrationView>> {
        let rows = self.registrations.list_with_details().await?;

        Ok(rows.into_iter().map(RegistrationView::from).collect())
    }

    async fn send_registration_mail(
        &self,
        student: &Student,
        plan: &Plan,
        registration: &Registration,
        welcome: bool,
    ) {
        let end_date = dates::format_mail_date(registration.end_date);

        if welcome {
            self.mailer
                .deliver_registration_welcome(
                    student,
                    &plan.title,
                    plan.duration,
                    &end_date,
                    registration.price,
                )
                .await;
        } else {
            self.mailer
                .deliver_registration_update(
                    student,
                    &plan.title,
                    plan.duration,
                    &end_date,
                    registration.price,
                )
                .await;
        }
    }
}
