//! Submission state machine.
//!
//! Defines a pure state transition function for the account creation flow.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Messages a failed submission can report. One is picked uniformly.
pub const SUBMISSION_ERROR_MESSAGES: [&str; 5] = [
    "Network error. Please check your connection and try again.",
    "Server is temporarily unavailable. Please try again in a moment.",
    "Account creation failed. Please try again.",
    "Email verification service is down. Please try again later.",
    "Service maintenance in progress. Please try again later.",
];

/// Submission flow state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    /// Form is editable.
    #[default]
    Idle,
    /// Waiting for the simulated server.
    Submitting,
    /// Account created.
    Success,
    /// Attempt failed with a message from [`SUBMISSION_ERROR_MESSAGES`].
    Error { message: String },
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Events that drive the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// Submit button clicked; `eligible` is the form's submit-eligibility.
    Submit { eligible: bool },
    /// Simulated server accepted the registration.
    Succeeded,
    /// Simulated server rejected the registration.
    Failed { message: String },
    /// Back to the form keeping every value.
    Retry,
    /// Back to an empty form.
    Reset,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionAction {
    /// Schedule the simulated server response.
    StartSubmission,
    /// Re-initialize every piece of form state.
    ClearForm,
}

/// What the simulated server answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed { message: String },
}

impl From<SubmissionOutcome> for SubmissionEvent {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Succeeded => SubmissionEvent::Succeeded,
            SubmissionOutcome::Failed { message } => SubmissionEvent::Failed { message },
        }
    }
}

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionTicket(pub(crate) u64);

impl fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission-{}", self.0)
    }
}

/// Pure submission state machine: no side-effects.
pub struct SubmissionStateMachine;

impl SubmissionStateMachine {
    pub fn transition(
        state: SubmissionState,
        event: SubmissionEvent,
    ) -> (SubmissionState, Vec<SubmissionAction>) {
        match (state, event) {
            (SubmissionState::Idle, SubmissionEvent::Submit { eligible: true }) => (
                SubmissionState::Submitting,
                vec![SubmissionAction::StartSubmission],
            ),
            (SubmissionState::Submitting, SubmissionEvent::Succeeded) => {
                (SubmissionState::Success, Vec::new())
            }
            (SubmissionState::Submitting, SubmissionEvent::Failed { message }) => {
                (SubmissionState::Error { message }, Vec::new())
            }
            (SubmissionState::Error { .. }, SubmissionEvent::Retry) => {
                (SubmissionState::Idle, Vec::new())
            }
            (_, SubmissionEvent::Reset) => {
                (SubmissionState::Idle, vec![SubmissionAction::ClearForm])
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}
