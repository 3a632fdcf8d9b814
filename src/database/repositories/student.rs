//! Student repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::student::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::utils::errors::GymBuddyError;

#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new student
    pub async fn create(&self, request: CreateStudentRequest) -> Result<Student, GymBuddyError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, age, weight, height, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, age, weight, height, created_at, updated_at
            "#,
        )
        .bind(request.name)
        .bind(request.email)
        .bind(request.age)
        .bind(request.weight)
        .bind(request.height)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    /// Find student by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>, GymBuddyError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age, weight, height, created_at, updated_at FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Update student
    pub async fn update(
        &self,
        id: i64,
        request: UpdateStudentRequest,
    ) -> Result<Student, GymBuddyError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                age = COALESCE($4, age),
                weight = COALESCE($5, weight),
                height = COALESCE($6, height),
                updated_at = $7
            WHERE id = $1
            RETURNING id, name, email, age, weight, height, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(request.name)
        .bind(request.email)
        .bind(request.age)
        .bind(request.weight)
        .bind(request.height)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    /// List all students, newest first
    pub async fn list(&self) -> Result<Vec<Student>, GymBuddyError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age, weight, height, created_at, updated_at FROM students ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }
}
