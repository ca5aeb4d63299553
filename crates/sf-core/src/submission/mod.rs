//! Submission domain module.
//!
//! This module defines the submission state machine types.

pub mod state_machine;

pub use state_machine::{
    SubmissionAction, SubmissionEvent, SubmissionOutcome, SubmissionState,
    SubmissionStateMachine, SubmissionTicket, SUBMISSION_ERROR_MESSAGES,
};
