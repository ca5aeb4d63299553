//! Outcome of a deferred operation.

/// State of a deferred (timer-backed) operation as seen by its owner.
///
/// `Superseded` means the operation finished but its result no longer applied
/// to the current form state and was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome<T> {
    Pending,
    Resolved(T),
    Superseded,
}

impl<T> TaskOutcome<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskOutcome::Pending)
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, TaskOutcome::Superseded)
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            TaskOutcome::Resolved(value) => Some(value),
            TaskOutcome::Pending | TaskOutcome::Superseded => None,
        }
    }
}
