use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use doctor_cell::services::directory::DoctorDirectory;
use patient_cell::services::registry::PatientRegistry;
use shared_validation::{validate_future_instant, ValidationError};

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentStatus, BookAppointmentRequest,
    DEFAULT_REASON,
};
use crate::services::conflict::SlotConflictChecker;
use crate::services::lifecycle::AppointmentLifecycle;

/// Owns the appointment collection and its lifecycle. Booking resolves
/// the referenced patient and doctor, validates the slot instant, and
/// runs the conflict scan and insert under a single write guard so two
/// concurrent bookings cannot both claim overlapping slots.
pub struct AppointmentScheduler {
    patients: Arc<PatientRegistry>,
    doctors: Arc<DoctorDirectory>,
    conflicts: SlotConflictChecker,
    lifecycle: AppointmentLifecycle,
    appointments: RwLock<Vec<Appointment>>,
    next_id: AtomicI64,
}

impl AppointmentScheduler {
    pub fn new(patients: Arc<PatientRegistry>, doctors: Arc<DoctorDirectory>) -> Self {
        Self {
            patients,
            doctors,
            conflicts: SlotConflictChecker::new(),
            lifecycle: AppointmentLifecycle::new(),
            appointments: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let (patient_id, doctor_id, scheduled_at) =
            match (request.patient_id, request.doctor_id, request.scheduled_at) {
                (Some(patient_id), Some(doctor_id), Some(scheduled_at)) => {
                    (patient_id, doctor_id, scheduled_at)
                }
                _ => return Err(ValidationError::MissingFields.into()),
            };

        // Patients and doctors are never deleted, so resolving them ahead
        // of the appointment lock cannot go stale.
        let patient = self
            .patients
            .get(patient_id)
            .await
            .map_err(|_| AppointmentError::PatientNotFound)?;
        let doctor = self
            .doctors
            .get(doctor_id)
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        validate_future_instant(scheduled_at, Utc::now())?;

        let mut appointments = self.appointments.write().await;

        if self
            .conflicts
            .has_conflict(&appointments, doctor_id, scheduled_at)
        {
            return Err(AppointmentError::SlotConflict);
        }

        let appointment = Appointment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            patient_id,
            patient_name: patient.name,
            doctor_id,
            doctor_name: doctor.name,
            scheduled_at,
            reason: request
                .reason
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REASON.to_string()),
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
            cancelled_at: None,
        };

        appointments.push(appointment.clone());
        info!(
            "Booked appointment {} for patient {} with doctor {} at {}",
            appointment.id, patient_id, doctor_id, scheduled_at
        );

        Ok(appointment)
    }

    /// Appointments matching every supplied filter, in storage order.
    pub async fn list(&self, filter: AppointmentFilter) -> Vec<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .filter(|appointment| {
                filter.status.map_or(true, |s| appointment.status == s)
                    && filter.patient_id.map_or(true, |id| appointment.patient_id == id)
                    && filter.doctor_id.map_or(true, |id| appointment.doctor_id == id)
            })
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<Appointment, AppointmentError> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
            .ok_or(AppointmentError::NotFound)
    }

    /// Move an appointment to its terminal `cancelled` status. Cancelling
    /// an already-cancelled appointment is a reported business error.
    pub async fn cancel(&self, id: i64) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.write().await;

        let appointment = appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(AppointmentError::NotFound)?;

        self.lifecycle
            .validate_transition(&appointment.status, &AppointmentStatus::Cancelled)
            .map_err(|_| AppointmentError::AlreadyCancelled)?;

        appointment.status = AppointmentStatus::Cancelled;
        appointment.cancelled_at = Some(Utc::now());
        debug!("Cancelled appointment {}", id);

        Ok(appointment.clone())
    }

    /// Test-harness hook: drop every appointment and restart id
    /// assignment. The doctor directory is untouched.
    pub async fn reset(&self) {
        self.appointments.write().await.clear();
        self.next_id.store(1, Ordering::SeqCst);
    }
}
