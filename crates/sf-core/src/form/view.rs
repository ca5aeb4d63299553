//! Presentation-facing projection of a [`FormSnapshot`].

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityStatus;
use crate::form::{FieldId, FormSnapshot, PasswordStrength};
use crate::submission::SubmissionState;

pub const SUBMIT_LABEL: &str = "Create Account";
pub const SUBMITTING_LABEL: &str = "Creating Account...";

/// Mutually exclusive region shown for a submission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Form,
    Success,
    Error,
}

impl Panel {
    pub fn for_state(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Idle | SubmissionState::Submitting => Panel::Form,
            SubmissionState::Success => Panel::Success,
            SubmissionState::Error { .. } => Panel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub field: FieldId,
    /// Whether the field is rendered in its error style.
    pub show_error: bool,
    pub message: String,
}

/// Everything the presentation layer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub strength: PasswordStrength,
    pub availability: AvailabilityStatus,
    pub terms_accepted: bool,
    pub newsletter: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub loading: bool,
    pub panel: Panel,
    pub error_message: Option<String>,
}

impl FormView {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let fields = FieldId::ALL
            .into_iter()
            .map(|field| {
                let state = snapshot.field(field);
                FieldView {
                    field,
                    show_error: state.touched && !state.valid,
                    message: state.error_message.clone(),
                }
            })
            .collect();

        let submitting = snapshot.submission().is_submitting();
        let submit_label = if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL };
        Self {
            fields,
            strength: snapshot.strength(),
            availability: snapshot.availability(),
            terms_accepted: snapshot.terms_accepted(),
            newsletter: snapshot.newsletter(),
            submit_enabled: snapshot.is_submittable(),
            submit_label: submit_label.to_string(),
            loading: submitting,
            panel: Panel::for_state(snapshot.submission()),
            error_message: snapshot.submission().error_message().map(str::to_owned),
        }
    }

    pub fn field(&self, field: FieldId) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    pub fn message(&self, field: FieldId) -> &str {
        self.field(field).map_or("", |view| view.message.as_str())
    }
}
