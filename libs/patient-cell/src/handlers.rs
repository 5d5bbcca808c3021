use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;

use crate::models::{Patient, PatientError, RegisterPatientRequest};
use crate::services::registry::PatientRegistry;

fn map_patient_error(error: PatientError) -> AppError {
    match error {
        PatientError::NotFound => AppError::NotFound(error.to_string()),
        PatientError::EmailAlreadyExists { .. } => AppError::Duplicate(error.to_string()),
        PatientError::Validation(e) => AppError::ValidationError(e.to_string()),
    }
}

#[axum::debug_handler]
pub async fn register_patient(
    State(registry): State<Arc<PatientRegistry>>,
    Json(request): Json<RegisterPatientRequest>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    let patient = registry
        .register(request)
        .await
        .map_err(map_patient_error)?;

    Ok((StatusCode::CREATED, Json(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(State(registry): State<Arc<PatientRegistry>>) -> Json<Vec<Patient>> {
    Json(registry.list().await)
}

#[axum::debug_handler]
pub async fn get_patient(
    State(registry): State<Arc<PatientRegistry>>,
    Path(id): Path<i64>,
) -> Result<Json<Patient>, AppError> {
    let patient = registry.get(id).await.map_err(map_patient_error)?;
    Ok(Json(patient))
}
