//! Check-in handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::http::response::ApiResult;
use crate::http::AppState;
use crate::models::checkin::{Checkin, CheckinView};

pub async fn checkin_history(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> ApiResult<Json<Vec<CheckinView>>> {
    Ok(Json(state.services.checkins.history(student_id).await?))
}

pub async fn perform_checkin(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> ApiResult<Json<Checkin>> {
    Ok(Json(state.services.checkins.check_in(student_id).await?))
}
