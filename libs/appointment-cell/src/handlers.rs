use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, BookAppointmentRequest,
};
use crate::services::booking::AppointmentScheduler;

fn map_appointment_error(error: AppointmentError) -> AppError {
    match error {
        AppointmentError::NotFound
        | AppointmentError::PatientNotFound
        | AppointmentError::DoctorNotFound => AppError::NotFound(error.to_string()),
        AppointmentError::SlotConflict => AppError::Conflict(error.to_string()),
        // Reported as a business error, not a slot collision: 400.
        AppointmentError::AlreadyCancelled
        | AppointmentError::InvalidStatusTransition(_) => AppError::BadRequest(error.to_string()),
        AppointmentError::Validation(e) => AppError::ValidationError(e.to_string()),
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(scheduler): State<Arc<AppointmentScheduler>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = scheduler
        .book(request)
        .await
        .map_err(map_appointment_error)?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(scheduler): State<Arc<AppointmentScheduler>>,
    Query(filter): Query<AppointmentFilter>,
) -> Json<Vec<Appointment>> {
    Json(scheduler.list(filter).await)
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(scheduler): State<Arc<AppointmentScheduler>>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = scheduler.get(id).await.map_err(map_appointment_error)?;
    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(scheduler): State<Arc<AppointmentScheduler>>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = scheduler.cancel(id).await.map_err(map_appointment_error)?;
    Ok(Json(appointment))
}
