//! Plan model
//!
//! A plan's `duration` is a whole number of months; `price` is the monthly
//! price. The total price of a registration is computed from both at
//! enrollment time and frozen on the registration row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plan {
    pub id: i64,
    pub title: String,
    pub duration: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    pub title: String,
    pub duration: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlanRequest {
    pub title: Option<String>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
}

/// Plan fields embedded in list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: i64,
    pub title: String,
    pub duration: i32,
    pub price: f64,
}

impl From<Plan> for PlanSummary {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id,
            title: plan.title,
            duration: plan.duration,
            price: plan.price,
        }
    }
}
