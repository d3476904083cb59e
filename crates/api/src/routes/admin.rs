use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/teachers", post(handlers::admin::create_teacher))
        .route(
            "/api/admin/teacher-requests/:id/approve",
            post(handlers::admin::approve_request),
        )
        .route(
            "/api/admin/teacher-requests",
            get(handlers::admin::list_requests),
        )
}
