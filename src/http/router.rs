//! Route table

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::http::{handlers, AppState};
use crate::middleware::logging::trace_requests;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .route(
            "/students",
            get(handlers::students::list_students).post(handlers::students::create_student),
        )
        .route(
            "/students/:id",
            get(handlers::students::get_student).put(handlers::students::update_student),
        )
        .route(
            "/students/:id/checkin",
            get(handlers::checkins::checkin_history).post(handlers::checkins::perform_checkin),
        )
        .route(
            "/students/:id/help-orders",
            post(handlers::help_orders::ask),
        )
        .route(
            "/plans",
            get(handlers::plans::list_plans).post(handlers::plans::create_plan),
        )
        .route(
            "/plans/:id",
            put(handlers::plans::update_plan).delete(handlers::plans::delete_plan),
        )
        .route(
            "/registrations",
            get(handlers::registrations::list_registrations)
                .post(handlers::registrations::enroll)
                .put(handlers::registrations::amend),
        )
        .route(
            "/registrations/:id",
            delete(handlers::registrations::remove_registration),
        )
        .route("/help-orders", get(handlers::help_orders::list_unanswered))
        .route("/help-orders/:id", get(handlers::help_orders::student_orders))
        .route("/help-orders/:id/answer", put(handlers::help_orders::answer))
        .layer(axum::middleware::from_fn(trace_requests))
        .with_state(state)
}
