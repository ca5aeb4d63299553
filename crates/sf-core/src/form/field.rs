use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl FieldId {
    pub const COUNT: usize = 5;

    /// Every field in render order.
    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Terms,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Password => 2,
            FieldId::ConfirmPassword => 3,
            FieldId::Terms => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm_password",
            FieldId::Terms => "terms",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that carry free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl From<TextField> for FieldId {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => FieldId::Name,
            TextField::Email => FieldId::Email,
            TextField::Password => FieldId::Password,
            TextField::ConfirmPassword => FieldId::ConfirmPassword,
        }
    }
}

/// Checkboxes on the form.
///
/// Only `Terms` participates in validation; `Newsletter` is an opt-in flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Checkbox {
    Terms,
    Newsletter,
}

/// Computed state of a single field.
///
/// `valid` is always tracked; `error_message` stays empty until the field
/// has been touched. For [`FieldId::Terms`] the checkbox state lives in
/// [`FormSnapshot::terms_accepted`](crate::form::FormSnapshot::terms_accepted)
/// and `value` is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub valid: bool,
    pub error_message: String,
}
