//! Registration handlers

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::http::response::ApiResult;
use crate::http::AppState;
use crate::models::registration::{
    CreateRegistrationRequest, Registration, RegistrationView, UpdateRegistrationRequest,
};

pub async fn list_registrations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RegistrationView>>> {
    Ok(Json(state.services.registrations.list().await?))
}

pub async fn enroll(
    State(state): State<AppState>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> ApiResult<Json<Registration>> {
    Ok(Json(state.services.registrations.enroll(payload).await?))
}

/// Amend a registration; the id travels in the body
pub async fn amend(
    State(state): State<AppState>,
    Json(payload): Json<UpdateRegistrationRequest>,
) -> ApiResult<Json<Registration>> {
    Ok(Json(state.services.registrations.amend(payload).await?))
}

pub async fn remove_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    state.services.registrations.remove(id).await?;

    Ok(Json(json!({ "deleted": id })))
}
