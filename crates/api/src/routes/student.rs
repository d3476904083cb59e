use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/student/reservations",
            post(handlers::student::reserve_slot).get(handlers::student::list_reservations),
        )
        .route(
            "/api/student/reservations/:id/cancel",
            post(handlers::student::cancel_reservation),
        )
        .route(
            "/api/student/teachers/:id/slots",
            get(handlers::student::teacher_available_slots),
        )
}
