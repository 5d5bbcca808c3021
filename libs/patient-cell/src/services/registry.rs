use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use shared_validation::{
    normalize_email, normalize_phone, validate_registration, ValidationError,
};

use crate::models::{Patient, PatientError, RegisterPatientRequest};

/// Append-only store of patient identities. Email uniqueness is enforced
/// on the normalized form, and the uniqueness check and insert happen
/// under one write guard so concurrent registrations cannot both claim
/// the same address.
pub struct PatientRegistry {
    patients: RwLock<Vec<Patient>>,
    next_id: AtomicI64,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn register(&self, request: RegisterPatientRequest) -> Result<Patient, PatientError> {
        let (name, email, phone) = match (request.name, request.email, request.phone) {
            (Some(name), Some(email), Some(phone)) => (name, email, phone),
            _ => return Err(ValidationError::MissingFields.into()),
        };

        validate_registration(&name, &email, &phone)?;

        let normalized_email = normalize_email(&email);

        let mut patients = self.patients.write().await;

        if patients.iter().any(|p| p.email == normalized_email) {
            warn!("Registration rejected, email already in use");
            return Err(PatientError::EmailAlreadyExists {
                email: normalized_email,
            });
        }

        let patient = Patient {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.trim().to_string(),
            email: normalized_email,
            phone: normalize_phone(&phone),
            created_at: Utc::now(),
        };

        patients.push(patient.clone());
        debug!("Registered patient {}", patient.id);

        Ok(patient)
    }

    /// All patients in creation order.
    pub async fn list(&self) -> Vec<Patient> {
        self.patients.read().await.clone()
    }

    pub async fn get(&self, id: i64) -> Result<Patient, PatientError> {
        self.patients
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PatientError::NotFound)
    }

    /// Test-harness hook: drop every patient and restart id assignment.
    pub async fn reset(&self) {
        self.patients.write().await.clear();
        self.next_id.store(1, Ordering::SeqCst);
    }
}

impl Default for PatientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
