//! HTTP module
//!
//! Axum router, handlers and the error-to-response contract.

pub mod handlers;
pub mod response;
pub mod router;

pub use response::{ApiError, ApiResult};
pub use router::build_router;

use crate::database::DatabasePool;
use crate::services::ServiceFactory;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub services: ServiceFactory,
    pub pool: DatabasePool,
}
