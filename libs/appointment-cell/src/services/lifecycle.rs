use tracing::{debug, warn};

use crate::models::{AppointmentError, AppointmentStatus};

/// Status state machine for a single appointment: `scheduled` may move to
/// `cancelled`; `cancelled` is terminal.
pub struct AppointmentLifecycle;

impl AppointmentLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed.
    pub fn validate_transition(
        &self,
        current: &AppointmentStatus,
        next: &AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition {} -> {}", current, next);

        if !self.valid_transitions(current).contains(next) {
            warn!("Invalid status transition attempted: {} -> {}", current, next);
            return Err(AppointmentError::InvalidStatusTransition(*current));
        }

        Ok(())
    }

    /// All statuses reachable from `current`.
    pub fn valid_transitions(&self, current: &AppointmentStatus) -> Vec<AppointmentStatus> {
        match current {
            AppointmentStatus::Scheduled => vec![AppointmentStatus::Cancelled],
            // Terminal state, no transitions out
            AppointmentStatus::Cancelled => vec![],
        }
    }

    pub fn is_terminal(&self, status: &AppointmentStatus) -> bool {
        self.valid_transitions(status).is_empty()
    }
}

impl Default for AppointmentLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn scheduled_can_only_move_to_cancelled() {
        let lifecycle = AppointmentLifecycle::new();
        assert_eq!(
            lifecycle.valid_transitions(&AppointmentStatus::Scheduled),
            vec![AppointmentStatus::Cancelled]
        );
        assert!(lifecycle
            .validate_transition(&AppointmentStatus::Scheduled, &AppointmentStatus::Cancelled)
            .is_ok());
    }

    #[test]
    fn cancelled_is_terminal() {
        let lifecycle = AppointmentLifecycle::new();
        assert!(lifecycle.is_terminal(&AppointmentStatus::Cancelled));
        assert_matches!(
            lifecycle
                .validate_transition(&AppointmentStatus::Cancelled, &AppointmentStatus::Scheduled),
            Err(AppointmentError::InvalidStatusTransition(
                AppointmentStatus::Cancelled
            ))
        );
        assert_matches!(
            lifecycle
                .validate_transition(&AppointmentStatus::Cancelled, &AppointmentStatus::Cancelled),
            Err(AppointmentError::InvalidStatusTransition(
                AppointmentStatus::Cancelled
            ))
        );
    }
}
