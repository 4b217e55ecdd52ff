#[cfg(test)]
#[path = "status_state_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;

use crate::domain::models::StatusSnapshot;

#[derive(Default)]
pub struct StatusState {
    pub snapshot: Option<StatusSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_checked: Option<DateTime<Local>>,
}

impl StatusState {
    /// Returns false when a check is already in flight.
    pub fn begin_check(&mut self) -> bool {
        if self.loading {
            return false;
        }

        self.loading = true;
        self.error = None;
        return true;
    }

    pub fn check_succeeded(&mut self, snapshot: StatusSnapshot) {
        self.loading = false;
        self.error = None;
        self.snapshot = Some(snapshot);
        self.last_checked = Some(Local::now());
    }

    /// Stale health data is never shown next to a failure.
    pub fn check_failed(&mut self, message: &str) {
        self.loading = false;
        self.snapshot = None;
        self.error = Some(message.to_string());
        self.last_checked = Some(Local::now());
    }
}
