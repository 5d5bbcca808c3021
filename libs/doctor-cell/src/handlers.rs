use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use shared_models::error::AppError;

use crate::models::{Doctor, DoctorError};
use crate::services::directory::DoctorDirectory;

#[axum::debug_handler]
pub async fn list_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
) -> Json<Vec<Doctor>> {
    Json(directory.list())
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(directory): State<Arc<DoctorDirectory>>,
    Path(id): Path<i64>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = directory.get(id).map_err(|e| match e {
        DoctorError::NotFound => AppError::NotFound(e.to_string()),
    })?;

    Ok(Json(doctor))
}
