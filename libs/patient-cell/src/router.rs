use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::registry::PatientRegistry;

pub fn patient_routes(registry: Arc<PatientRegistry>) -> Router {
    Router::new()
        .route("/", post(handlers::register_patient))
        .route("/", get(handlers::list_patients))
        .route("/{id}", get(handlers::get_patient))
        .with_state(registry)
}
