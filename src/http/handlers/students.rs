//! Student administration handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::http::response::ApiResult;
use crate::http::AppState;
use crate::models::student::{CreateStudentRequest, Student, UpdateStudentRequest};

pub async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.services.students.list().await?))
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> ApiResult<Json<Student>> {
    Ok(Json(state.services.students.create(payload).await?))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Student>> {
    Ok(Json(state.services.students.get(id).await?))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStudentRequest>,
) -> ApiResult<Json<Student>> {
    Ok(Json(state.services.students.update(id, payload).await?))
}
