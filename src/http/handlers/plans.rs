//! Plan administration handlers

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::http::response::ApiResult;
use crate::http::AppState;
use crate::models::plan::{CreatePlanRequest, Plan, UpdatePlanRequest};

pub async fn list_plans(State(state): State<AppState>) -> ApiResult<Json<Vec<Plan>>> {
    Ok(Json(state.services.plans.list().await?))
}

pub async fn create_plan(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanRequest>,
) -> ApiResult<Json<Plan>> {
    Ok(Json(state.services.plans.create(payload).await?))
}

pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePlanRequest>,
) -> ApiResult<Json<Plan>> {
    Ok(Json(state.services.plans.update(id, payload).await?))
}

pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    state.services.plans.remove(id).await?;

    Ok(Json(json!({ "deleted": id })))
}
