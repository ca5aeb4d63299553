//! # sf-core
//!
//! Core domain models and form rules for the sign-up form engine.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! validators, the password strength scorer, touch tracking, the email
//! availability tracker and the submission state machine. Timers, randomness
//! and rendering are reached through [`ports`].

pub mod availability;
pub mod config;
pub mod form;
pub mod ports;
pub mod submission;
pub mod task;

// Re-export commonly used types at the crate root
pub use availability::{AvailabilityStatus, AvailabilityTracker, AvailabilityVerdict, CheckTicket};
pub use config::{ConfigError, EngineConfig};
pub use form::{
    Checkbox, FieldId, FieldState, FormSnapshot, FormView, Panel, PasswordStrength,
    StrengthLabel, TextField, ValidationError,
};
pub use submission::{SubmissionOutcome, SubmissionState, SubmissionTicket};
pub use task::TaskOutcome;
