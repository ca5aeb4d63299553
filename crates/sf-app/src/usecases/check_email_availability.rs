//! Simulated email uniqueness lookup.

use std::sync::Arc;

use sf_core::config::AvailabilityConfig;
use sf_core::ports::{RandomPort, RandomPortExt};
use sf_core::AvailabilityVerdict;
use tracing::debug;

use super::SimulatedResponse;

/// Decides how long the fake lookup takes and what it answers.
///
/// Draw order from the random source: latency, then verdict.
pub struct CheckEmailAvailability {
    random: Arc<dyn RandomPort>,
    config: AvailabilityConfig,
}

impl CheckEmailAvailability {
    pub fn new(random: Arc<dyn RandomPort>, config: AvailabilityConfig) -> Self {
        Self { random, config }
    }

    pub fn execute(&self) -> SimulatedResponse<AvailabilityVerdict> {
        let latency = self.config.latency().sample(self.random.as_ref());
        let outcome = if self.random.chance(self.config.taken_probability) {
            AvailabilityVerdict::Taken
        } else {
            AvailabilityVerdict::Available
        };
        debug!(
            latency_ms = latency.as_millis() as u64,
            ?outcome,
            "availability check scheduled"
        );
        SimulatedResponse { latency, outcome }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sf_infra::random::ScriptedRandom;

    use super::*;

    #[test]
    fn low_draw_reports_taken() {
        let random = Arc::new(ScriptedRandom::new([0.0, 0.29]));
        let usecase = CheckEmailAvailability::new(random, AvailabilityConfig::default());

        let response = usecase.execute();
        assert_eq!(response.latency, Duration::from_millis(500));
        assert_eq!(response.outcome, AvailabilityVerdict::Taken);
    }

    #[test]
    fn high_draw_reports_available_with_latency_under_window() {
        let random = Arc::new(ScriptedRandom::new([0.999, 0.3]));
        let usecase = CheckEmailAvailability::new(random, AvailabilityConfig::default());

        let response = usecase.execute();
        assert!(response.latency < Duration::from_millis(2500));
        assert!(response.latency >= Duration::from_millis(2490));
        assert_eq!(response.outcome, AvailabilityVerdict::Available);
    }
}
