use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::models::{Appointment, AppointmentStatus};

/// Shortest permitted gap between two scheduled slots of one doctor.
pub const MIN_SEPARATION_MINUTES: i64 = 60;

/// Pure slot-distance check against a doctor's scheduled appointments.
/// Cancelled appointments free their slot and are ignored. The bound is
/// exclusive: two slots exactly one separation window apart do not
/// collide.
pub struct SlotConflictChecker {
    separation: Duration,
}

impl SlotConflictChecker {
    pub fn new() -> Self {
        Self {
            separation: Duration::minutes(MIN_SEPARATION_MINUTES),
        }
    }

    /// True when `candidate` falls within the separation window of any
    /// scheduled appointment for `doctor_id` in `existing`.
    pub fn has_conflict(
        &self,
        existing: &[Appointment],
        doctor_id: i64,
        candidate: DateTime<Utc>,
    ) -> bool {
        let conflict = existing.iter().any(|appointment| {
            appointment.doctor_id == doctor_id
                && appointment.status == AppointmentStatus::Scheduled
                && self.slots_collide(appointment.scheduled_at, candidate)
        });

        if conflict {
            warn!("Slot conflict detected for doctor {}", doctor_id);
        }

        conflict
    }

    fn slots_collide(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        let distance = if a >= b { a - b } else { b - a };
        distance < self.separation
    }
}

impl Default for SlotConflictChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn appointment(doctor_id: i64, scheduled_at: DateTime<Utc>, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: 1,
            patient_id: 1,
            patient_name: "Ana".to_string(),
            doctor_id,
            doctor_name: "Dr. García".to_string(),
            scheduled_at,
            reason: "checkup".to_string(),
            status,
            created_at: Utc::now(),
            cancelled_at: None,
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2031, 5, 20, hour, minute, 0).unwrap()
    }

    #[test]
    fn exactly_one_hour_apart_is_allowed() {
        let checker = SlotConflictChecker::new();
        let existing = [appointment(1, at(10, 0), AppointmentStatus::Scheduled)];

        assert!(!checker.has_conflict(&existing, 1, at(11, 0)));
        assert!(!checker.has_conflict(&existing, 1, at(9, 0)));
    }

    #[test]
    fn anything_inside_the_window_collides_in_both_directions() {
        let checker = SlotConflictChecker::new();
        let existing = [appointment(1, at(10, 0), AppointmentStatus::Scheduled)];

        assert!(checker.has_conflict(&existing, 1, at(10, 30)));
        assert!(checker.has_conflict(&existing, 1, at(9, 1)));
        assert!(checker.has_conflict(&existing, 1, at(10, 59)));
        assert!(checker.has_conflict(&existing, 1, at(10, 0)));
    }

    #[test]
    fn other_doctors_and_cancelled_slots_do_not_collide() {
        let checker = SlotConflictChecker::new();
        let existing = [
            appointment(1, at(10, 0), AppointmentStatus::Cancelled),
            appointment(2, at(10, 0), AppointmentStatus::Scheduled),
        ];

        assert!(!checker.has_conflict(&existing, 1, at(10, 30)));
    }
}
