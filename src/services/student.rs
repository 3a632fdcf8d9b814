//! Student service implementation
//!
//! Staff-facing student administration: create, update, fetch and list.

use tracing::{debug, info};

use crate::database::repositories::StudentRepository;
use crate::models::student::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::utils::errors::{GymBuddyError, Result};

/// Student service for profile management
#[derive(Debug, Clone)]
pub struct StudentService {
    students: StudentRepository,
}

impl StudentService {
    /// Create a new StudentService instance
    pub fn new(students: StudentRepository) -> Self {
        Self { students }
    }

    /// Register a new student
    pub async fn create(&self, request: CreateStudentRequest) -> Result<Student> {
        debug!(name = %request.name, "Creating student");

        validate_name(&request.name)?;
        validate_email(&request.email)?;
        validate_measurements(request.age, request.weight, request.height)?;

        let student = self.students.create(request).await?;
        info!(student_id = student.id, "Student created");

        Ok(student)
    }

    /// Update a student's profile
    pub async fn update(&self, student_id: i64, request: UpdateStudentRequest) -> Result<Student> {
        debug!(student_id = student_id, "Updating student");

        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound { student_id })?;

        if let Some(name) = &request.name {
            validate_name(name)?;
        }
        if let Some(email) = &request.email {
            validate_email(email)?;
        }
        validate_measurements(
            request.age.unwrap_or(1),
            request.weight.unwrap_or(1.0),
            request.height.unwrap_or(1.0),
        )?;

        let student = self.students.update(student_id, request).await?;
        info!(student_id = student.id, "Student updated");

        Ok(student)
    }

    /// Fetch a student by ID
    pub async fn get(&self, student_id: i64) -> Result<Student> {
        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(GymBuddyError::StudentNotFound { student_id })
    }

    /// List all students, newest first
    pub async fn list(&self) -> Result<Vec<Student>> {
        self.students.list().await
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GymBuddyError::Validation("A name is required".to_string()));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    // Shape check only; deliverability is the mail gateway's problem
    let valid = email.len() > 5 && email.contains('@') && email.contains('.');
    if !valid {
        return Err(GymBuddyError::Validation(
            "A valid email is required".to_string(),
        ));
    }

    Ok(())
}

fn validate_measurements(age: i32, weight: f64, height: f64) -> Result<()> {
    if age <= 0 {
        return Err(GymBuddyError::Validation(
            "Age must be greater than 0".to_string(),
        ));
    }

    if weight <= 0.0 || height <= 0.0 {
        return Err(GymBuddyError::Validation(
            "Weight and height must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
