use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::directory::DoctorDirectory;

/// Read-only doctor routes. No authentication layer: the directory is
/// public, immutable data.
pub fn doctor_routes(directory: Arc<DoctorDirectory>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{id}", get(handlers::get_doctor))
        .with_state(directory)
}
