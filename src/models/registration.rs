//! Registration model
//!
//! A registration enrolls a student into a plan for a fixed date range at a
//! fixed price. `end_date` is always `start_date` advanced by the plan's
//! duration in whole months, and `price` is `plan.price * plan.duration` at
//! the time of the write; later plan changes never touch existing rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::plan::PlanSummary;
use crate::models::student::StudentSummary;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: i64,
    pub student_id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegistrationRequest {
    pub student_id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
}

/// Amendment payload; the registration id travels in the body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRegistrationRequest {
    pub id: i64,
    pub plan_id: i64,
    pub start_date: DateTime<Utc>,
}

/// Joined row used by the registration listing
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationWithDetails {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_age: i32,
    pub student_weight: f64,
    pub student_height: f64,
    pub plan_id: i64,
    pub plan_title: String,
    pub plan_duration: i32,
    pub plan_price: f64,
}

/// API shape of a listed registration, with embedded summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationView {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub student: StudentSummary,
    pub plan: PlanSummary,
}

impl From<RegistrationWithDetails> for RegistrationView {
    fn from(row: RegistrationWithDetails) -> Self {
        Self {
            id: row.id,
            start_date: row.start_date,
            end_date: row.end_date,
            price: row.price,
            created_at: row.created_at,
            student: StudentSummary {
                id: row.student_id,
                name: row.student_name,
                email: row.student_email,
                age: row.student_age,
                weight: row.student_weight,
                height: row.student_height,
            },
            plan: PlanSummary {
                id: row.plan_id,
                title: row.plan_title,
                duration: row.plan_duration,
                price: row.plan_price,
            },
        }
    }
}
