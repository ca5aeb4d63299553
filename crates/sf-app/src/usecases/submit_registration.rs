//! Simulated account creation request.

use std::sync::Arc;

use sf_core::config::SubmissionConfig;
use sf_core::ports::{RandomPort, RandomPortExt};
use sf_core::submission::SUBMISSION_ERROR_MESSAGES;
use sf_core::SubmissionOutcome;
use tracing::debug;

use super::SimulatedResponse;

/// Decides how long the fake submission takes and whether it fails.
///
/// Draw order from the random source: latency, failure roll, then the error
/// message (only on failure).
pub struct SubmitRegistration {
    random: Arc<dyn RandomPort>,
    config: SubmissionConfig,
}

impl SubmitRegistration {
    pub fn new(random: Arc<dyn RandomPort>, config: SubmissionConfig) -> Self {
        Self { random, config }
    }

    pub fn execute(&self) -> SimulatedResponse<SubmissionOutcome> {
        let latency = self.config.latency().sample(self.random.as_ref());
        let outcome = if self.random.chance(self.config.failure_probability) {
            let message = self
                .random
                .pick(&SUBMISSION_ERROR_MESSAGES)
                .copied()
                .unwrap_or(SUBMISSION_ERROR_MESSAGES[0]);
            SubmissionOutcome::Failed {
                message: message.to_string(),
            }
        } else {
            SubmissionOutcome::Succeeded
        };
        debug!(
            latency_ms = latency.as_millis() as u64,
            ?outcome,
            "submission response scheduled"
        );
        SimulatedResponse { latency, outcome }
    }
}
