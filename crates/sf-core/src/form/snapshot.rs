//! Aggregate form state.
//!
//! [`FormSnapshot`] is the single value the orchestrator owns. Every mutator
//! re-runs the validators so field verdicts never lag behind their inputs.

use crate::availability::{AvailabilityStatus, AvailabilityTracker, AvailabilityVerdict, CheckTicket};
use crate::form::strength::{self, PasswordStrength};
use crate::form::validation::{self, FormInput, ValidationError};
use crate::form::view::FormView;
use crate::form::{Checkbox, FieldId, FieldState, TextField, TouchTracker};
use crate::submission::{
    SubmissionAction, SubmissionEvent, SubmissionOutcome, SubmissionState,
    SubmissionStateMachine, SubmissionTicket,
};
use crate::task::TaskOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: [FieldState; FieldId::COUNT],
    terms_accepted: bool,
    newsletter: bool,
    strength: PasswordStrength,
    touch: TouchTracker,
    availability: AvailabilityTracker,
    submission: SubmissionState,
    submission_generation: u64,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSnapshot {
    /// Fresh session state: empty, untouched, idle.
    pub fn new() -> Self {
        let mut snapshot = Self {
            fields: Default::default(),
            terms_accepted: false,
            newsletter: false,
            strength: PasswordStrength::default(),
            touch: TouchTracker::default(),
            availability: AvailabilityTracker::default(),
            submission: SubmissionState::Idle,
            submission_generation: 0,
        };
        snapshot.revalidate();
        snapshot
    }

    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: TextField) -> &str {
        &self.field(field.into()).value
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn newsletter(&self) -> bool {
        self.newsletter
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn touch(&self) -> &TouchTracker {
        &self.touch
    }

    pub fn availability(&self) -> AvailabilityStatus {
        self.availability.status()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    fn input(&self) -> FormInput<'_> {
        FormInput {
            name: self.value(TextField::Name),
            email: self.value(TextField::Email),
            password: self.value(TextField::Password),
            confirm_password: self.value(TextField::ConfirmPassword),
            terms_accepted: self.terms_accepted,
        }
    }

    /// Value changed: touches the field and re-runs validation.
    pub fn set_value(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        self.touch.touch(field.into());
        match field {
            TextField::Email => self.availability.email_edited(&value),
            TextField::Password => self.strength = strength::score(&value),
            TextField::Name | TextField::ConfirmPassword => {}
        }
        self.fields[FieldId::from(field).index()].value = value;
        self.revalidate();
    }

    /// Focus lost. Blurring a non-empty email starts an availability check.
    pub fn blur(&mut self, field: FieldId) -> Option<CheckTicket> {
        self.touch.touch(field);
        let ticket = match field {
            FieldId::Email => {
                let email = self.fields[FieldId::Email.index()].value.clone();
                self.availability.begin_check(&email)
            }
            _ => None,
        };
        self.revalidate();
        ticket
    }

    pub fn set_checkbox(&mut self, checkbox: Checkbox, checked: bool) {
        match checkbox {
            Checkbox::Terms => {
                self.touch.touch(FieldId::Terms);
                self.terms_accepted = checked;
            }
            Checkbox::Newsletter => self.newsletter = checked,
        }
        self.revalidate();
    }

    pub fn resolve_availability(
        &mut self,
        ticket: CheckTicket,
        verdict: AvailabilityVerdict,
    ) -> TaskOutcome<AvailabilityStatus> {
        let email = self.fields[FieldId::Email.index()].value.clone();
        let outcome = self.availability.resolve(ticket, &email, verdict);
        self.revalidate();
        outcome
    }

    /// Verdict for `field` including the standing `Taken` override.
    pub fn verdict(&self, field: FieldId) -> Result<(), ValidationError> {
        if field == FieldId::Email && self.availability.is_taken() {
            return Err(ValidationError::EmailAlreadyRegistered);
        }
        validation::validate(field, &self.input())
    }

    /// Recompute validity and visible messages of every field.
    ///
    /// Idempotent: running it again with unchanged inputs changes nothing.
    pub fn revalidate(&mut self) {
        let verdicts = FieldId::ALL.map(|field| self.verdict(field));
        for (field, verdict) in FieldId::ALL.into_iter().zip(verdicts) {
            let touched = self.touch.is_touched(field);
            let state = &mut self.fields[field.index()];
            state.touched = touched;
            state.valid = verdict.is_ok();
            state.error_message = match verdict {
                Err(err) if touched => err.to_string(),
                _ => String::new(),
            };
        }
    }

    /// Submit-eligibility.
    ///
    /// Empty required fields count as invalid even while untouched.
    pub fn is_submittable(&self) -> bool {
        self.submission.is_idle()
            && self.terms_accepted
            && self.fields.iter().all(|field| field.valid)
    }

    /// Run a submission event through the state machine.
    pub fn transition_submission(&mut self, event: SubmissionEvent) -> Vec<SubmissionAction> {
        let current = std::mem::take(&mut self.submission);
        let (next, actions) = SubmissionStateMachine::transition(current, event);
        self.submission = next;
        actions
    }

    /// Ticket for the attempt that just entered `Submitting`.
    pub fn issue_submission_ticket(&mut self) -> SubmissionTicket {
        self.submission_generation += 1;
        SubmissionTicket(self.submission_generation)
    }

    pub fn resolve_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: SubmissionOutcome,
    ) -> TaskOutcome<SubmissionState> {
        if ticket.0 != self.submission_generation || !self.submission.is_submitting() {
            tracing::debug!(%ticket, latest = self.submission_generation, "submission result superseded");
            return TaskOutcome::Superseded;
        }
        self.transition_submission(outcome.into());
        TaskOutcome::Resolved(self.submission.clone())
    }

    /// Full reset to a fresh form.
    ///
    /// Generations keep counting so results of operations started before the
    /// reset are recognized as stale.
    pub fn reset(&mut self) {
        let mut availability = std::mem::take(&mut self.availability);
        availability.reset();
        let submission_generation = self.submission_generation + 1;
        *self = Self {
            availability,
            submission_generation,
            ..Self::new()
        };
    }

    pub fn view(&self) -> FormView {
        FormView::from_snapshot(self)
    }
}
