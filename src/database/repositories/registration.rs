//! Registration repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::registration::{Registration, RegistrationWithDetails};
use crate::utils::errors::GymBuddyError;

/// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new registration
    ///
    /// The table carries a unique constraint on student_id, so a concurrent
    /// enroll for the same student loses here even after passing the
    /// rule-layer check.
    pub async fn create(
        &self,
        student_id: i64,
        plan_id: i64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        price: f64,
    ) -> Result<Registration, GymBuddyError> {
        let result = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (student_id, plan_id, start_date, end_date, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, student_id, plan_id, start_date, end_date, price, created_at, updated_at
            "#,
        )
        .bind(student_id)
        .bind(plan_id)
        .bind(start_date)
        .bind(end_date)
        .bind(price)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(registration) => Ok(registration),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(GymBuddyError::AlreadyRegistered { student_id })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find registration by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, GymBuddyError> {
        let registration = sqlx::query_as::<_, Registration>(
            "SELECT id, student_id, plan_id, start_date, end_date, price, created_at, updated_at FROM registrations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Find a student's registration, if any
    pub async fn find_by_student(&self, student_id: i64) -> Result<Option<Registration>, GymBuddyError> {
        let registration = sqlx::query_as::<_, Registration>(
            "SELECT id, student_id, plan_id, start_date, end_date, price, created_at, updated_at FROM registrations WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Update a registration's plan, dates and frozen price
    pub async fn update(
        &self,
        id: i64,
        plan_id: i64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        price: f64,
    ) -> Result<Registration, GymBuddyError> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET plan_id = $2,
                start_date = $3,
                end_date = $4,
                price = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, student_id, plan_id, start_date, end_date, price, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(plan_id)
        .bind(start_date)
        .bind(end_date)
        .bind(price)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    /// Delete registration
    pub async fn delete(&self, id: i64) -> Result<(), GymBuddyError> {
        sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List all registrations with student and plan summaries, newest first
    pub async fn list_with_details(&self) -> Result<Vec<RegistrationWithDetails>, GymBuddyError> {
        let registrations = sqlx::query_as::<_, RegistrationWithDetails>(
            r#"
            SELECT r.id, r.start_date, r.end_date, r.price, r.created_at,
                   s.id AS student_id, s.name AS student_name, s.email AS student_email,
                   s.age AS student_age, s.weight AS student_weight, s.height AS student_height,
                   p.id AS plan_id, p.title AS plan_title, p.duration AS plan_duration, p.price AS plan_price
            FROM registrations r
            INNER JOIN students s ON s.id = r.student_id
            INNER JOIN plans p ON p.id = r.plan_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }
}
