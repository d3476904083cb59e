use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/public/register/student",
            post(handlers::public::register_student),
        )
        .route("/api/public/teachers", get(handlers::public::list_teachers))
        .route(
            "/api/public/teachers/:id",
            get(handlers::public::get_teacher),
        )
        .route(
            "/api/public/teacher-requests",
            post(handlers::public::submit_teacher_request),
        )
        .route("/api/public/files", post(handlers::files::upload))
        .route(
            "/api/public/files/download/:file_name",
            get(handlers::files::download),
        )
}
