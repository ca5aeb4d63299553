pub mod check_email_availability;
pub mod form;
pub mod submit_registration;

pub use check_email_availability::CheckEmailAvailability;
pub use form::FormOrchestrator;
pub use submit_registration::SubmitRegistration;

use std::time::Duration;

/// A simulated server reply: what it answers and how long it takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedResponse<T> {
    pub latency: Duration,
    pub outcome: T,
}
