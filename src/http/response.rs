//! HTTP response contract
//!
//! Every error surfaces as `{ "error": <message> }`. Missing entities map to
//! 404, validation and business-rule rejections to 400, infrastructure
//! failures to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::utils::errors::GymBuddyError;

/// Map an error to its HTTP status
pub fn error_status(err: &GymBuddyError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Wrapper carrying a domain error out of a handler
#[derive(Debug)]
pub struct ApiError(pub GymBuddyError);

impl From<GymBuddyError> for ApiError {
    fn from(err: GymBuddyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = error_status(&self.0);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Result type alias for handler functions
pub type ApiResult<T> = std::result::Result<T, ApiError>;
