use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use appointment_cell::router::appointment_routes;
use appointment_cell::services::booking::AppointmentScheduler;
use doctor_cell::router::doctor_routes;
use doctor_cell::services::directory::DoctorDirectory;
use patient_cell::router::patient_routes;
use patient_cell::services::registry::PatientRegistry;
use shared_config::AppConfig;

/// The in-memory stores shared by every cell. The scheduler composes the
/// registry and directory for reference resolution.
pub struct AppState {
    pub patients: Arc<PatientRegistry>,
    pub doctors: Arc<DoctorDirectory>,
    pub scheduler: Arc<AppointmentScheduler>,
}

impl AppState {
    pub fn new() -> Self {
        let patients = Arc::new(PatientRegistry::new());
        let doctors = Arc::new(DoctorDirectory::with_default_seed());
        let scheduler = Arc::new(AppointmentScheduler::new(
            Arc::clone(&patients),
            Arc::clone(&doctors),
        ));

        Self {
            patients,
            doctors,
            scheduler,
        }
    }
}

pub fn create_router(config: &AppConfig, state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .nest("/api/doctors", doctor_routes(Arc::clone(&state.doctors)))
        .nest("/api/patients", patient_routes(Arc::clone(&state.patients)))
        .nest(
            "/api/appointments",
            appointment_routes(Arc::clone(&state.scheduler)),
        );

    if config.enable_test_routes {
        router = router.nest("/api", harness_routes(state));
    }

    router
}

#[derive(Clone)]
struct HarnessState {
    patients: Arc<PatientRegistry>,
    scheduler: Arc<AppointmentScheduler>,
}

/// Test-harness routes, only mounted when `ENABLE_TEST_ROUTES` is set.
fn harness_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/reset", post(reset))
        .with_state(HarnessState {
            patients: Arc::clone(&state.patients),
            scheduler: Arc::clone(&state.scheduler),
        })
}

/// Drop all patients and appointments; the doctor seed stays in place.
async fn reset(State(state): State<HarnessState>) -> Json<Value> {
    state.scheduler.reset().await;
    state.patients.reset().await;

    Json(json!({ "message": "Data reset" }))
}
