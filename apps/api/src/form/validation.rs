//! Per-field validation rules for the application form.
//!
//! Every field is required; the email must additionally look like
//! `user@domain`. Failures carry the exact inline messages the form shows
//! next to each field.

use crate::models::application::ApplicationRecord;

/// A single failed rule, surfaced inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// The loose `^\S+@\S+$` email shape: no whitespace anywhere, and at least
/// one `@` with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + c.len_utf8() < value.len())
}

/// Validates the contact step: name, email, phone.
pub fn validate_contact(record: &ApplicationRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if record.name.is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if record.email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&record.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if record.phone.is_empty() {
        errors.push(FieldError::new("phone", "Phone number is required"));
    }
    errors
}

/// Validates the background step: date of birth, address, position.
pub fn validate_background(record: &ApplicationRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if record.dob.is_empty() {
        errors.push(FieldError::new("dob", "Date of Birth is required"));
    }
    if record.address.is_empty() {
        errors.push(FieldError::new("address", "Address is required"));
    }
    if record.position.is_empty() {
        errors.push(FieldError::new("position", "Position is required"));
    }
    errors
}

/// Validates the full record, both steps at once. The final gate before
/// anything goes on the wire.
pub fn validate_record(record: &ApplicationRecord) -> Vec<FieldError> {
    let mut errors = validate_contact(record);
    errors.extend(validate_background(record));
    errors
}
