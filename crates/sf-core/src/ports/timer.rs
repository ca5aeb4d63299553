use std::time::Duration;

/// Timer service used to simulate server latency.
#[async_trait::async_trait]
pub trait TimerPort: Send + Sync {
    /// Complete after `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}
