//! Password strength scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::validation::{CharacterClasses, PASSWORD_MIN_LEN};

pub const MAX_SCORE: u8 = 5;

/// Tier shown under the password field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::None => "Enter a password",
            StrengthLabel::Weak => "Weak password",
            StrengthLabel::Medium => "Medium strength",
            StrengthLabel::Strong => "Strong password",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a password from 0 to [`MAX_SCORE`].
///
/// One point each for minimum length, lowercase, uppercase, digit and
/// symbol. Updates on every keystroke regardless of touched state.
pub fn score(password: &str) -> PasswordStrength {
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;
    let score = u8::from(long_enough) + CharacterClasses::of(password).count();

    let label = if score >= 4 {
        StrengthLabel::Strong
    } else if score >= 2 {
        StrengthLabel::Medium
    } else if !password.is_empty() {
        StrengthLabel::Weak
    } else {
        StrengthLabel::None
    };

    PasswordStrength { score, label }
}
