use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/auth/register/teacher",
            post(handlers::auth::register_teacher),
        )
}
