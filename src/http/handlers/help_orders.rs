//! Help order handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::http::response::ApiResult;
use crate::http::AppState;
use crate::models::help_order::{
    AnswerHelpOrderRequest, AskHelpOrderRequest, HelpOrder, HelpOrderView,
};

pub async fn list_unanswered(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<HelpOrderView>>> {
    Ok(Json(state.services.help_orders.list_unanswered().await?))
}

/// All orders of one student; the path id is the student id
pub async fn student_orders(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> ApiResult<Json<Vec<HelpOrderView>>> {
    Ok(Json(
        state.services.help_orders.list_for_student(student_id).await?,
    ))
}

pub async fn ask(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(payload): Json<AskHelpOrderRequest>,
) -> ApiResult<Json<HelpOrder>> {
    Ok(Json(state.services.help_orders.ask(student_id, payload).await?))
}

pub async fn answer(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(payload): Json<AnswerHelpOrderRequest>,
) -> ApiResult<Json<HelpOrder>> {
    Ok(Json(state.services.help_orders.answer(order_id, payload).await?))
}
