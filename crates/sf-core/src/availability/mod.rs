//! Email availability tracking.
//!
//! The check itself is simulated by the application layer; this module owns
//! the status, the standing `Taken` override and stale-result detection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::TaskOutcome;

/// Availability of the email value as shown next to the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    #[default]
    Idle,
    Checking,
    Available,
    Taken,
}

impl AvailabilityStatus {
    /// Status line rendered under the email field.
    pub fn status_text(self) -> &'static str {
        match self {
            AvailabilityStatus::Idle => "",
            AvailabilityStatus::Checking => "⏳ Checking availability...",
            AvailabilityStatus::Available => "✓ Email available",
            AvailabilityStatus::Taken => "⚠ Email already taken",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_text())
    }
}

/// Result of a simulated uniqueness lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityVerdict {
    Available,
    Taken,
}

impl From<AvailabilityVerdict> for AvailabilityStatus {
    fn from(verdict: AvailabilityVerdict) -> Self {
        match verdict {
            AvailabilityVerdict::Available => AvailabilityStatus::Available,
            AvailabilityVerdict::Taken => AvailabilityStatus::Taken,
        }
    }
}

/// Identifies one availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckTicket(u64);

impl fmt::Display for CheckTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "check-{}", self.0)
    }
}

/// Tracks the availability status of the email field.
///
/// Every check gets a fresh generation. A verdict is applied only when its
/// ticket is still the latest, the status is still `Checking` and the email
/// still holds the value that was checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityTracker {
    status: AvailabilityStatus,
    generation: u64,
    checked_value: Option<String>,
}

impl AvailabilityTracker {
    pub fn status(&self) -> AvailabilityStatus {
        self.status
    }

    /// `Taken` forces the email field invalid until the next check or reset.
    pub fn is_taken(&self) -> bool {
        self.status == AvailabilityStatus::Taken
    }

    pub fn is_checking(&self) -> bool {
        self.status == AvailabilityStatus::Checking
    }

    /// Start a check for `email`. Empty values are not checked.
    pub fn begin_check(&mut self, email: &str) -> Option<CheckTicket> {
        if email.is_empty() {
            return None;
        }
        self.generation += 1;
        self.status = AvailabilityStatus::Checking;
        self.checked_value = Some(email.to_string());
        Some(CheckTicket(self.generation))
    }

    /// Apply a verdict for `ticket`, or report it superseded.
    pub fn resolve(
        &mut self,
        ticket: CheckTicket,
        current_email: &str,
        verdict: AvailabilityVerdict,
    ) -> TaskOutcome<AvailabilityStatus> {
        let current = ticket.0 == self.generation
            && self.is_checking()
            && self.checked_value.as_deref() == Some(current_email);
        if !current {
            debug!(%ticket, latest = self.generation, "availability verdict superseded");
            return TaskOutcome::Superseded;
        }
        self.status = verdict.into();
        self.checked_value = None;
        TaskOutcome::Resolved(self.status)
    }

    /// The email changed. An in-flight check for another value is abandoned.
    ///
    /// Settled statuses, including the `Taken` override, stay until the next
    /// check.
    pub fn email_edited(&mut self, value: &str) {
        if self.is_checking() && self.checked_value.as_deref() != Some(value) {
            self.generation += 1;
            self.status = AvailabilityStatus::Idle;
            self.checked_value = None;
        }
    }

    /// Back to `Idle`; any in-flight check becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = AvailabilityStatus::Idle;
        self.checked_value = None;
    }
}
