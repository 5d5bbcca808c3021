use tracing::debug;

use crate::models::{Doctor, DoctorError};

/// Read-only catalog of bookable doctors, fixed at construction time.
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The stock clinic roster used when no custom seed is supplied.
    pub fn with_default_seed() -> Self {
        Self::new(vec![
            Doctor {
                id: 1,
                name: "Dr. García".to_string(),
                specialty: "General Medicine".to_string(),
            },
            Doctor {
                id: 2,
                name: "Dr. Martínez".to_string(),
                specialty: "Pediatrics".to_string(),
            },
            Doctor {
                id: 3,
                name: "Dr. López".to_string(),
                specialty: "Cardiology".to_string(),
            },
        ])
    }

    /// All doctors in seed order.
    pub fn list(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }

    pub fn get(&self, id: i64) -> Result<Doctor, DoctorError> {
        debug!("Looking up doctor {}", id);
        self.doctors
            .iter()
            .find(|doctor| doctor.id == id)
            .cloned()
            .ok_or(DoctorError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_seed_lists_three_doctors_in_order() {
        let directory = DoctorDirectory::with_default_seed();
        let doctors = directory.list();
        assert_eq!(doctors.len(), 3);
        assert_eq!(
            doctors.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(doctors[2].specialty, "Cardiology");
    }

    #[test]
    fn get_resolves_seeded_ids_and_rejects_unknown() {
        let directory = DoctorDirectory::with_default_seed();
        assert_eq!(directory.get(1).unwrap().name, "Dr. García");
        assert_matches!(directory.get(999), Err(DoctorError::NotFound));
    }
}
