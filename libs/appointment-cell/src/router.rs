use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::services::booking::AppointmentScheduler;

pub fn appointment_routes(scheduler: Arc<AppointmentScheduler>) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/{id}", get(handlers::get_appointment))
        .route("/{id}", delete(handlers::cancel_appointment))
        .with_state(scheduler)
}
