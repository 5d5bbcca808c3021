use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_validation::ValidationError;

/// Reason recorded when the caller does not supply one.
pub const DEFAULT_REASON: &str = "General consultation";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A booked slot. `patient_name` and `doctor_name` are denormalized from
/// the resolved entities at booking time for listing display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Booking input. Ids and the slot instant are required; `reason` is
/// optional and defaulted. Presence is checked before any lookup so a
/// missing field reports as a validation failure, not a 404.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookAppointmentRequest {
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

/// Listing filters, combined with logical AND; absent filters impose no
/// constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("appointment not found")]
    NotFound,

    #[error("patient not found")]
    PatientNotFound,

    #[error("doctor not found")]
    DoctorNotFound,

    #[error("slot already taken")]
    SlotConflict,

    #[error("already cancelled")]
    AlreadyCancelled,

    #[error("appointment cannot leave terminal status {0}")]
    InvalidStatusTransition(AppointmentStatus),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
