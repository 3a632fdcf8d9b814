//! Checkin repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::checkin::{Checkin, CheckinWithStudent};
use crate::utils::errors::GymBuddyError;

#[derive(Debug, Clone)]
pub struct CheckinRepository {
    pool: PgPool,
}

impl CheckinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a check-in for a student at the current timestamp
    pub async fn create(&self, student_id: i64) -> Result<Checkin, GymBuddyError> {
        let checkin = sqlx::query_as::<_, Checkin>(
            r#"
            INSERT INTO checkins (student_id, created_at)
            VALUES ($1, $2)
            RETURNING id, student_id, created_at
            "#,
        )
        .bind(student_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(checkin)
    }

    /// Find a student's check-in within [from, to), if any
    pub async fn find_in_range(
        &self,
        student_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Option<Checkin>, GymBuddyError> {
        let checkin = sqlx::query_as::<_, Checkin>(
            "SELECT id, student_id, created_at FROM checkins WHERE student_id = $1 AND created_at >= $2 AND created_at < $3",
        )
        .bind(student_id)
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await?;

        Ok(checkin)
    }

    /// Count a student's check-ins within the half-open window (after, until]
    pub async fn count_in_window(
        &self,
        student_id: i64,
        after: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<i64, GymBuddyError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM checkins WHERE student_id = $1 AND created_at > $2 AND created_at <= $3",
        )
        .bind(student_id)
        .bind(after)
        .bind(until)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// A student's check-in history with student summary, newest first
    pub async fn history_with_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<CheckinWithStudent>, GymBuddyError> {
        let checkins = sqlx::query_as::<_, CheckinWithStudent>(
            r#"
            SELECT c.id, c.created_at,
                   s.id AS student_id, s.name AS student_name, s.email AS student_email,
                   s.age AS student_age, s.weight AS student_weight, s.height AS student_height
            FROM checkins c
            INNER JOIN students s ON s.id = c.student_id
            WHERE c.student_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(checkins)
    }
}
