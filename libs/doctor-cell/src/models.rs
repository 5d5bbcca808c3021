use serde::{Deserialize, Serialize};

/// A bookable provider. The directory is seeded once at startup and never
/// mutated, so `Doctor` has no lifecycle fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DoctorError {
    #[error("doctor not found")]
    NotFound,
}
