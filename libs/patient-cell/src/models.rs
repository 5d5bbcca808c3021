use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_validation::ValidationError;

/// A registered patient. Fields are stored in normalized form (trimmed
/// name, lower-cased email, separator-free phone) and never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Registration input. All three fields are required; presence is checked
/// before the field-level rules so a missing field reports as such rather
/// than as a malformed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterPatientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PatientError {
    #[error("patient not found")]
    NotFound,

    #[error("email {email} already registered")]
    EmailAlreadyExists { email: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
