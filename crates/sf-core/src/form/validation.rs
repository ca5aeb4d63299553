//! Field validators.
//!
//! Pure functions from raw input to a verdict. The `Display` of each
//! [`ValidationError`] is the message shown next to the field once touched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::FieldId;

pub const NAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 8;

/// Symbols that satisfy the "special character" requirement.
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name can only contain letters and spaces")]
    NameInvalidCharacters,
    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalidFormat,
    #[error("This email is already registered. Please use a different email.")]
    EmailAlreadyRegistered,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must include uppercase, lowercase, number, and special character")]
    PasswordComposition,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

/// Borrowed view of every raw input the validators read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub terms_accepted: bool,
}

/// Validate one field against the current form input.
///
/// Confirm-password depends on the password value, so the whole input is
/// passed rather than a single string.
pub fn validate(field: FieldId, input: &FormInput<'_>) -> Result<(), ValidationError> {
    match field {
        FieldId::Name => validate_name(input.name),
        FieldId::Email => validate_email(input.email),
        FieldId::Password => validate_password(input.password),
        FieldId::ConfirmPassword => {
            validate_confirm_password(input.confirm_password, input.password)
        }
        FieldId::Terms => validate_terms(input.terms_accepted),
    }
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if trimmed.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort);
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::NameInvalidCharacters);
    }
    Ok(())
}

/// Base email check. The availability override is applied by the snapshot.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::EmailInvalidFormat);
    }
    Ok(())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !CharacterClasses::of(value).all() {
        return Err(ValidationError::PasswordComposition);
    }
    Ok(())
}

/// Case-sensitive, exact comparison against the password.
pub fn validate_confirm_password(value: &str, password: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::ConfirmPasswordRequired);
    }
    if value != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if accepted {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    pub fn of(value: &str) -> Self {
        value.chars().fold(Self::default(), |mut classes, c| {
            classes.lowercase |= c.is_ascii_lowercase();
            classes.uppercase |= c.is_ascii_uppercase();
            classes.digit |= c.is_ascii_digit();
            classes.symbol |= SPECIAL_CHARACTERS.contains(c);
            classes
        })
    }

    pub fn all(&self) -> bool {
        self.lowercase && self.uppercase && self.digit && self.symbol
    }

    pub fn count(&self) -> u8 {
        [self.lowercase, self.uppercase, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_rules_apply_in_order() {
        assert_eq!(validate_name(""), Err(ValidationError::NameRequired));
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_name(" J "), Err(ValidationError::NameTooShort));
        assert_eq!(
            validate_name("J0hn"),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(
            validate_name("Anne-Marie"),
            Err(ValidationError::NameInvalidCharacters)
        );
        assert_eq!(validate_name("John Doe"), Ok(()));
    }

    #[test]
    fn empty_name_message_matches_form_copy() {
        assert_eq!(
            ValidationError::NameRequired.to_string(),
            "Full name is required"
        );
    }

    #[test]
    fn email_requires_local_domain_and_tld() {
        assert_eq!(validate_email(" "), Err(ValidationError::EmailRequired));
        assert_eq!(
            validate_email("invalid-email"),
            Err(ValidationError::EmailInvalidFormat)
        );
        assert_eq!(
            validate_email("user@site"),
            Err(ValidationError::EmailInvalidFormat)
        );
        assert_eq!(
            validate_email("a@b@site.com"),
            Err(ValidationError::EmailInvalidFormat)
        );
        assert_eq!(
            validate_email(" user@site.com"),
            Err(ValidationError::EmailInvalidFormat)
        );
        assert_eq!(validate_email("user@site.com"), Ok(()));
        assert_eq!(validate_email("john.doe@mail.example.org"), Ok(()));
    }

    #[test]
    fn password_checks_length_before_composition() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(
            validate_password("Ab1!"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_password("abcdefgh"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(
            validate_password("Abcdefg1"),
            Err(ValidationError::PasswordComposition)
        );
        assert_eq!(validate_password("SecurePass123!"), Ok(()));
    }

    #[test]
    fn confirm_password_reports_missing_then_mismatch() {
        assert_eq!(
            validate_confirm_password("", "Secret1!"),
            Err(ValidationError::ConfirmPasswordRequired)
        );
        assert_eq!(
            validate_confirm_password("X", "Y"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(validate_confirm_password("Y", "Y"), Ok(()));
    }

    #[test]
    fn terms_valid_only_when_accepted() {
        assert_eq!(validate_terms(true), Ok(()));
        assert_eq!(validate_terms(false), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn validate_dispatches_confirm_against_password() {
        let input = FormInput {
            password: "SecurePass123!",
            confirm_password: "securepass123!",
            ..FormInput::default()
        };
        assert_eq!(
            validate(FieldId::ConfirmPassword, &input),
            Err(ValidationError::PasswordMismatch)
        );
    }

    proptest! {
        #[test]
        fn confirm_valid_iff_identical(confirm in ".{0,12}", password in ".{0,12}") {
            let verdict = validate_confirm_password(&confirm, &password);
            if confirm.is_empty() {
                prop_assert_eq!(verdict, Err(ValidationError::ConfirmPasswordRequired));
            } else {
                prop_assert_eq!(verdict.is_ok(), confirm == password);
            }
        }

        #[test]
        fn confirm_matching_itself_is_valid(password in ".{1,16}") {
            prop_assert_eq!(validate_confirm_password(&password, &password), Ok(()));
        }
    }
}
