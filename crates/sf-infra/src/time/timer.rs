use sf_core::ports::TimerPort;
use tokio::time::{sleep, Duration};
use tracing::trace;

/// [`TimerPort`] backed by the tokio clock.
///
/// Honors `tokio::time::pause`, so tests can settle simulated latency
/// instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl TokioTimer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TimerPort for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        trace!(duration_ms = duration.as_millis() as u64, "timer started");
        sleep(duration).await;
    }
}
