//! Plan repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::plan::{CreatePlanRequest, Plan, UpdatePlanRequest};
use crate::utils::errors::GymBuddyError;

#[derive(Debug, Clone)]
pub struct PlanRepository {
    pool: PgPool,
}

impl PlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new plan
    pub async fn create(&self, request: CreatePlanRequest) -> Result<Plan, GymBuddyError> {
        let plan = sqlx::query_as::<_, Plan>(
            r#"
            INSERT INTO plans (title, duration, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, duration, price, created_at, updated_at
            "#,
        )
        .bind(request.title)
        .bind(request.duration)
        .bind(request.price)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    /// Find plan by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Plan>, GymBuddyError> {
        let plan = sqlx::query_as::<_, Plan>(
            "SELECT id, title, duration, price, created_at, updated_at FROM plans WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    /// Update plan
    pub async fn update(&self, id: i64, request: UpdatePlanRequest) -> Result<Plan, GymBuddyError> {
        let plan = sqlx::query_as::<_, Plan>(
            r#"
            UPDATE plans
            SET title = COALESCE($2, title),
                duration = COALESCE($3, duration),
                price = COALESCE($4, price),
                updated_at = $5
            WHERE id = $1
            RETURNING id, title, duration, price, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.title)
        .bind(request.duration)
        .bind(request.price)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    /// Delete plan
    pub async fn delete(&self, id: i64) -> Result<(), GymBuddyError> {
        sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List all plans, shortest duration first
    pub async fn list(&self) -> Result<Vec<Plan>, GymBuddyError> {
        let plans = sqlx::query_as::<_, Plan>(
            "SELECT id, title, duration, price, created_at, updated_at FROM plans ORDER BY duration ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }
}
