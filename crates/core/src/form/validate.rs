//! # Field Validation
//!
//! Pure validation rules for the contact form. Each rule is a function of
//! the field name and current value only, so the same input always yields
//! the same result.

use std::sync::OnceLock;

use regex::Regex;

use super::field::FieldName;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Shallow email shape check: something@something.something, no whitespace
/// or extra `@`. Deliberately not RFC-5322.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Validate one field. `None` means the value is acceptable.
pub fn validate(field: FieldName, value: &str) -> Option<&'static str> {
    match field {
        FieldName::Name => (value.trim().len() < 2).then_some(NAME_REQUIRED),
        FieldName::Email => (!email_pattern().is_match(value)).then_some(EMAIL_INVALID),
        FieldName::Subject => (value.trim().len() < 3).then_some(SUBJECT_REQUIRED),
        FieldName::Message => (value.trim().len() < 10).then_some(MESSAGE_TOO_SHORT),
    }
}

/// String-keyed entry point for the presentation boundary. Names that are
/// not form fields are always valid.
pub fn validate_named(name: &str, value: &str) -> Option<&'static str> {
    FieldName::parse(name).and_then(|field| validate(field, value))
}
