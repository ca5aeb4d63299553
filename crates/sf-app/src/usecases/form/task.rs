use std::future::Future;

use sf_core::TaskOutcome;
use tokio::task::JoinHandle;
use tracing::error;

/// Handle to a deferred form operation (availability check or submission).
///
/// The spawned future resolves to `Resolved` when its result was applied to
/// the form, or `Superseded` when the form had moved on.
pub struct PendingTask<T> {
    label: &'static str,
    handle: Option<JoinHandle<TaskOutcome<T>>>,
    settled: Option<TaskOutcome<T>>,
}

impl<T> PendingTask<T>
where
    T: Clone + Send + 'static,
{
    pub(crate) fn spawn<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = TaskOutcome<T>> + Send + 'static,
    {
        Self {
            label,
            handle: Some(tokio::spawn(future)),
            settled: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_finished(&self) -> bool {
        self.settled.is_some()
            || self
                .handle
                .as_ref()
                .is_some_and(|handle| handle.is_finished())
    }

    /// Outcome without waiting: `Pending` while the timer is still running.
    pub async fn poll_outcome(&mut self) -> TaskOutcome<T> {
        if let Some(outcome) = &self.settled {
            return outcome.clone();
        }
        if !self.is_finished() {
            return TaskOutcome::Pending;
        }
        self.join().await
    }

    /// Wait for the operation to finish.
    pub async fn wait(mut self) -> TaskOutcome<T> {
        match self.settled.take() {
            Some(outcome) => outcome,
            None => self.join().await,
        }
    }

    async fn join(&mut self) -> TaskOutcome<T> {
        let Some(handle) = self.handle.take() else {
            return self.settled.clone().unwrap_or(TaskOutcome::Superseded);
        };
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(task = self.label, error = %err, "deferred form task did not complete");
                TaskOutcome::Superseded
            }
        };
        self.settled = Some(outcome.clone());
        outcome
    }
}
