//! Help order repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::help_order::{HelpOrder, HelpOrderWithStudent};
use crate::utils::errors::GymBuddyError;

#[derive(Debug, Clone)]
pub struct HelpOrderRepository {
    pool: PgPool,
}

impl HelpOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new help order with the question only
    pub async fn create(&self, student_id: i64, question: &str) -> Result<HelpOrder, GymBuddyError> {
        let order = sqlx::query_as::<_, HelpOrder>(
            r#"
            INSERT INTO help_orders (student_id, question, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_id, question, answer, answered_at, created_at, updated_at
            "#,
        )
        .bind(student_id)
        .bind(question)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// Find help order by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<HelpOrder>, GymBuddyError> {
        let order = sqlx::query_as::<_, HelpOrder>(
            "SELECT id, student_id, question, answer, answered_at, created_at, updated_at FROM help_orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }

    /// Set the answer on an open help order
    pub async fn set_answer(
        &self,
        id: i64,
        answer: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<HelpOrder, GymBuddyError> {
        let order = sqlx::query_as::<_, HelpOrder>(
            r#"
            UPDATE help_orders
            SET answer = $2,
                answered_at = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, student_id, question, answer, answered_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(answer)
        .bind(answered_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// All unanswered orders with student summaries, newest first
    pub async fn list_unanswered(&self) -> Result<Vec<HelpOrderWithStudent>, GymBuddyError> {
        let orders = sqlx::query_as::<_, HelpOrderWithStudent>(
            r#"
            SELECT h.id, h.question, h.answer, h.answered_at, h.created_at,
                   s.id AS student_id, s.name AS student_name, s.email AS student_email,
                   s.age AS student_age, s.weight AS student_weight, s.height AS student_height
            FROM help_orders h
            INNER JOIN students s ON s.id = h.student_id
            WHERE h.answer IS NULL
            ORDER BY h.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// All of a student's orders with student summaries, newest first
    pub async fn list_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<HelpOrderWithStudent>, GymBuddyError> {
        let orders = sqlx::query_as::<_, HelpOrderWithStudent>(
            r#"
            SELECT h.id, h.question, h.answer, h.answered_at, h.created_at,
                   s.id AS student_id, s.name AS student_name, s.email AS student_email,
                   s.age AS student_age, s.weight AS student_weight, s.height AS student_height
            FROM help_orders h
            INNER JOIN students s ON s.id = h.student_id
            WHERE h.student_id = $1
            ORDER BY h.created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }
}
