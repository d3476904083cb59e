use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/teacher/profile", get(handlers::teacher::get_profile))
        .route("/api/teacher/skills", post(handlers::teacher::add_skill))
        .route(
            "/api/teacher/skills/:id",
            delete(handlers::teacher::delete_skill),
        )
        .route(
            "/api/teacher/slots/range",
            post(handlers::teacher::add_slots_range),
        )
        .route(
            "/api/teacher/slots/ranges",
            post(handlers::teacher::add_slots_ranges),
        )
        .route("/api/teacher/slots", get(handlers::teacher::list_slots))
        .route(
            "/api/teacher/slots/:id",
            delete(handlers::teacher::delete_slot),
        )
}
