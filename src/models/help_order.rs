//! Help order model
//!
//! A help order is created with the question only and mutated exactly once
//! to set the answer, moving it from open to answered. There is no way back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::student::StudentSummary;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HelpOrder {
    pub id: i64,
    pub student_id: i64,
    pub question: String,
    pub answer: Option<String>,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HelpOrder {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskHelpOrderRequest {
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerHelpOrderRequest {
    pub answer: Option<String>,
}

/// Joined row used by the help order listings
#[derive(Debug, Clone, FromRow)]
pub struct HelpOrderWithStudent {
    pub id: i64,
    pub question: String,
    pub answer: Option<String>,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub student_age: i32,
    pub student_weight: f64,
    pub student_height: f64,
}

/// API shape of a listed help order, with embedded student summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpOrderView {
    pub id: i64,
    pub question: String,
    pub answer: Option<String>,
    pub answered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub student: StudentSummary,
}

impl From<HelpOrderWithStudent> for HelpOrderView {
    fn from(row: HelpOrderWithStudent) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            answered_at: row.answered_at,
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_answered() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut order = HelpOrder {
            id: 1,
            student_id: 2,
            question: "Can I freeze my plan?".to_string(),
            answer: None,
            answered_at: None,
            created_at: ts,
            updated_at: ts,
        };
        assert!(!order.is_answered());

        order.answer = Some("Yes, at the front desk.".to_string());
        order.answered_at = Some(ts);
        assert!(order.is_answered());
    }
}
