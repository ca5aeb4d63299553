//! Form orchestrator.
//!
//! This module coordinates the form snapshot, the submission state machine and
//! the deferred simulated responses.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use sf_core::config::EngineConfig;
use sf_core::ports::{FormPresenterPort, RandomPort, TimerPort};
use sf_core::submission::{SubmissionAction, SubmissionEvent};
use sf_core::{
    AvailabilityStatus, AvailabilityVerdict, CheckTicket, Checkbox, FieldId, FormSnapshot,
    FormView, SubmissionOutcome, SubmissionState, SubmissionTicket, TaskOutcome, TextField,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, info_span, Instrument};

use crate::usecases::form::context::FormContext;
use crate::usecases::form::event::FormEvent;
use crate::usecases::form::task::PendingTask;
use crate::usecases::{CheckEmailAvailability, SimulatedResponse, SubmitRegistration};

/// Errors produced by the form orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("failed to render form view: {0}")]
    Render(#[source] anyhow::Error),
}

/// Outcomes of every deferred operation awaited by [`FormOrchestrator::settle`].
#[derive(Debug, Default)]
pub struct SettleReport {
    pub availability: Vec<TaskOutcome<AvailabilityStatus>>,
    pub submission: Vec<TaskOutcome<SubmissionState>>,
}

#[derive(Default)]
struct InFlight {
    availability: Vec<PendingTask<AvailabilityStatus>>,
    submission: Vec<PendingTask<SubmissionState>>,
}

impl InFlight {
    fn prune_finished(&mut self) {
        self.availability.retain(|task| !task.is_finished());
        self.submission.retain(|task| !task.is_finished());
    }
}

enum Deferred {
    Availability {
        ticket: CheckTicket,
        response: SimulatedResponse<AvailabilityVerdict>,
    },
    Submission {
        ticket: SubmissionTicket,
        response: SimulatedResponse<SubmissionOutcome>,
    },
}

/// Orchestrator that drives form state and side effects.
///
/// Owns the single [`FormSnapshot`] for a session. Every input event and every
/// timer resolution is applied under the context's dispatch lock and followed
/// by a render, so the presenter sees changes in the order they happened.
pub struct FormOrchestrator {
    context: Arc<FormContext>,
    in_flight: Mutex<InFlight>,

    check_email_availability: CheckEmailAvailability,
    submit_registration: SubmitRegistration,
    timer: Arc<dyn TimerPort>,
    presenter: Arc<dyn FormPresenterPort>,
}

impl FormOrchestrator {
    pub fn new(
        config: &EngineConfig,
        timer: Arc<dyn TimerPort>,
        random: Arc<dyn RandomPort>,
        presenter: Arc<dyn FormPresenterPort>,
    ) -> Self {
        Self {
            context: FormContext::default().arc(),
            in_flight: Mutex::new(InFlight::default()),
            check_email_availability: CheckEmailAvailability::new(
                Arc::clone(&random),
                config.availability.clone(),
            ),
            submit_registration: SubmitRegistration::new(random, config.submission.clone()),
            timer,
            presenter,
        }
    }

    pub async fn value_changed(
        &self,
        field: TextField,
        value: impl Into<String>,
    ) -> Result<FormView, FormError> {
        self.dispatch(FormEvent::ValueChanged {
            field,
            value: value.into(),
        })
        .await
    }

    pub async fn blurred(&self, field: FieldId) -> Result<FormView, FormError> {
        self.dispatch(FormEvent::Blurred { field }).await
    }

    pub async fn checkbox_toggled(
        &self,
        checkbox: Checkbox,
        checked: bool,
    ) -> Result<FormView, FormError> {
        self.dispatch(FormEvent::CheckboxToggled { checkbox, checked })
            .await
    }

    pub async fn submit(&self) -> Result<FormView, FormError> {
        self.dispatch(FormEvent::SubmitClicked).await
    }

    pub async fn retry(&self) -> Result<FormView, FormError> {
        self.dispatch(FormEvent::RetryClicked).await
    }

    pub async fn reset(&self) -> Result<FormView, FormError> {
        self.dispatch(FormEvent::ResetClicked).await
    }

    /// Current view without dispatching anything.
    pub async fn view(&self) -> FormView {
        self.context.snapshot().await.view()
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.context.snapshot().await
    }

    pub async fn dispatch(&self, event: FormEvent) -> Result<FormView, FormError> {
        // Serializes user events with timer resolutions.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.form_orchestrator.dispatch", event = event.kind());
        async {
            let (view, deferred) = {
                let mut snapshot = self.context.lock_snapshot().await;
                let deferred = self.apply(&mut snapshot, event);
                (snapshot.view(), deferred)
            };

            if let Some(deferred) = deferred {
                self.spawn_deferred(deferred).await;
            }

            self.presenter
                .render(&view)
                .await
                .map_err(FormError::Render)?;
            Ok(view)
        }
        .instrument(span)
        .await
    }

    /// Wait for every in-flight availability check and submission.
    ///
    /// Tasks that finished before the latest blur or submit are no longer
    /// tracked and do not appear in the report.
    pub async fn settle(&self) -> SettleReport {
        let InFlight {
            availability,
            submission,
        } = std::mem::take(&mut *self.in_flight.lock().await);

        let mut report = SettleReport::default();
        for task in availability {
            report.availability.push(task.wait().await);
        }
        for task in submission {
            report.submission.push(task.wait().await);
        }
        report
    }

    /// Hand over the tracked availability checks, for polling.
    pub async fn take_availability_tasks(&self) -> Vec<PendingTask<AvailabilityStatus>> {
        std::mem::take(&mut self.in_flight.lock().await.availability)
    }

    /// Hand over the tracked submissions, for polling.
    pub async fn take_submission_tasks(&self) -> Vec<PendingTask<SubmissionState>> {
        std::mem::take(&mut self.in_flight.lock().await.submission)
    }

    fn apply(&self, snapshot: &mut FormSnapshot, event: FormEvent) -> Option<Deferred> {
        if event.is_input() && !snapshot.submission().is_idle() {
            debug!(
                event = event.kind(),
                state = ?snapshot.submission(),
                "form is frozen, ignoring input"
            );
            return None;
        }

        match event {
            FormEvent::ValueChanged { field, value } => {
                snapshot.set_value(field, value);
                None
            }
            FormEvent::Blurred { field } => {
                let ticket = snapshot.blur(field)?;
                debug!(%ticket, "availability check started");
                Some(Deferred::Availability {
                    ticket,
                    response: self.check_email_availability.execute(),
                })
            }
            FormEvent::CheckboxToggled { checkbox, checked } => {
                snapshot.set_checkbox(checkbox, checked);
                None
            }
            FormEvent::SubmitClicked => {
                let eligible = snapshot.is_submittable();
                let actions =
                    self.transition_submission(snapshot, SubmissionEvent::Submit { eligible });
                if actions.is_empty() {
                    debug!(eligible, "submit ignored");
                }
                self.execute_actions(snapshot, actions)
            }
            FormEvent::RetryClicked => {
                let actions = self.transition_submission(snapshot, SubmissionEvent::Retry);
                self.execute_actions(snapshot, actions)
            }
            FormEvent::ResetClicked => {
                let actions = self.transition_submission(snapshot, SubmissionEvent::Reset);
                self.execute_actions(snapshot, actions)
            }
        }
    }

    fn transition_submission(
        &self,
        snapshot: &mut FormSnapshot,
        event: SubmissionEvent,
    ) -> Vec<SubmissionAction> {
        let from = snapshot.submission().clone();
        let event_name = format!("{:?}", event);
        let actions = snapshot.transition_submission(event);
        if &from != snapshot.submission() {
            info!(from = ?from, to = ?snapshot.submission(), event = %event_name, "submission state transition");
        } else {
            debug!(state = ?from, event = %event_name, "submission event left state unchanged");
        }
        actions
    }

    fn execute_actions(
        &self,
        snapshot: &mut FormSnapshot,
        actions: Vec<SubmissionAction>,
    ) -> Option<Deferred> {
        let mut deferred = None;
        for action in actions {
            debug!(?action, "submission executing action");
            match action {
                SubmissionAction::StartSubmission => {
                    let ticket = snapshot.issue_submission_ticket();
                    deferred = Some(Deferred::Submission {
                        ticket,
                        response: self.submit_registration.execute(),
                    });
                }
                SubmissionAction::ClearForm => {
                    snapshot.reset();
                }
            }
        }
        deferred
    }

    /// Track a new deferred resolution. Finished tasks are pruned first.
    async fn spawn_deferred(&self, deferred: Deferred) {
        let mut in_flight = self.in_flight.lock().await;
        in_flight.prune_finished();
        match deferred {
            Deferred::Availability { ticket, response } => {
                let verdict = response.outcome;
                let task = self.spawn_resolution("availability_check", response.latency, move |snapshot| {
                    snapshot.resolve_availability(ticket, verdict)
                });
                in_flight.availability.push(task);
            }
            Deferred::Submission { ticket, response } => {
                let outcome = response.outcome;
                let task = self.spawn_resolution("submission", response.latency, move |snapshot| {
                    snapshot.resolve_submission(ticket, outcome)
                });
                in_flight.submission.push(task);
            }
        }
    }

    /// Spawn a task that waits `latency`, then applies `resolve` to the
    /// snapshot and renders if the result still applied.
    fn spawn_resolution<T, F>(
        &self,
        label: &'static str,
        latency: Duration,
        resolve: F,
    ) -> PendingTask<T>
    where
        T: Clone + Debug + Send + 'static,
        F: FnOnce(&mut FormSnapshot) -> TaskOutcome<T> + Send + 'static,
    {
        let context = Arc::clone(&self.context);
        let timer = Arc::clone(&self.timer);
        let presenter = Arc::clone(&self.presenter);
        let span = info_span!(
            "usecase.form_orchestrator.resolve",
            task = label,
            latency_ms = latency.as_millis() as u64
        );

        PendingTask::spawn(
            label,
            async move {
                timer.sleep(latency).await;

                let _dispatch_guard = context.acquire_dispatch_lock().await;
                let (outcome, view) = {
                    let mut snapshot = context.lock_snapshot().await;
                    let outcome = resolve(&mut *snapshot);
                    (outcome, snapshot.view())
                };

                let applied = match &outcome {
                    TaskOutcome::Resolved(result) => {
                        info!(result = ?result, "deferred result applied");
                        true
                    }
                    TaskOutcome::Superseded | TaskOutcome::Pending => {
                        debug!("deferred result no longer applies, discarded");
                        false
                    }
                };
                if applied {
                    if let Err(err) = presenter.render(&view).await {
                        error!(error = %err, "failed to render resolved form state");
                    }
                }
                outcome
            }
            .instrument(span),
        )
    }
}
