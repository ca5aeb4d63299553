use serde::{Deserialize, Serialize};
use sf_core::{Checkbox, FieldId, TextField};

/// Input events consumed from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent {
    ValueChanged { field: TextField, value: String },
    Blurred { field: FieldId },
    CheckboxToggled { checkbox: Checkbox, checked: bool },
    SubmitClicked,
    RetryClicked,
    ResetClicked,
}

impl FormEvent {
    /// Event name for logs. Never includes field values.
    pub fn kind(&self) -> &'static str {
        match self {
            FormEvent::ValueChanged { .. } => "value_changed",
            FormEvent::Blurred { .. } => "blurred",
            FormEvent::CheckboxToggled { .. } => "checkbox_toggled",
            FormEvent::SubmitClicked => "submit_clicked",
            FormEvent::RetryClicked => "retry_clicked",
            FormEvent::ResetClicked => "reset_clicked",
        }
    }

    /// Events that edit the form itself rather than drive submission.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            FormEvent::ValueChanged { .. }
                | FormEvent::Blurred { .. }
                | FormEvent::CheckboxToggled { .. }
        )
    }
}
