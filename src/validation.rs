//! Contact form validation rules.
//!
//! Values are trimmed before any length check and lengths are counted in
//! characters, not bytes. The `Display` output of [`ValidationError`] is the
//! message rendered next to the offending field.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{FieldState, FormField};

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter your email address")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailMalformed,
    #[error("Please enter your message")]
    MessageMissing,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Check a single field value against its rule.
pub fn validate(field: FormField, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    match field {
        FormField::Name if value.is_empty() => Err(ValidationError::NameMissing),
        FormField::Name if value.chars().count() < MIN_NAME_CHARS => {
            Err(ValidationError::NameTooShort)
        }
        FormField::Email if value.is_empty() => Err(ValidationError::EmailMissing),
        FormField::Email if !EMAIL_SHAPE.is_match(value) => Err(ValidationError::EmailMalformed),
        FormField::Message if value.is_empty() => Err(ValidationError::MessageMissing),
        FormField::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Err(ValidationError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

/// Validate a field and package the result for rendering.
pub fn field_state(field: FormField, value: &str) -> FieldState {
    FieldState {
        field,
        error: validate(field, value).err().map(|e| e.to_string()),
    }
}
