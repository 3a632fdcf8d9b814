//! Checkin model
//!
//! Check-ins are append-only attendance records; `created_at` is the only
//! meaningful field and rows are never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::student::StudentSummary;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Checkin {
    pub id: i64,
    pub student_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Joined row used by the check-in history listing
#[derive(Debug, Clone, FromRow)]
pub struct CheckinWithStudent {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_age: i32,
    pub student_weight: f64,
    pub student_height: f64,
}

/// API shape of a listed check-in, with embedded student summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinView {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub student: StudentSummary,
}

impl From<CheckinWithStudent> for CheckinView {
    fn from(row: CheckinWithStudent) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            student: StudentSummary {
                id: row.student_id,
                name: row.student_name,
                email: row.student_email,
                age: row.student_age,
                weight: row.student_weight,
                height: row.student_height,
            },
        }
    }
}
