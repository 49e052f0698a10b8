//! Form checks applied before credentials or line items reach the store.

use crate::core::errors::{FieldError, RemoError};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Something, an `@`, something, a dot, something. Unanchored, so surrounding text is allowed.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid regex"));

pub fn looks_like_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.is_empty() {
        errors.push(FieldError::new("email", "Invalid email", "Email is required"));
    } else if !looks_like_email(email) {
        errors.push(FieldError::new("email", "Invalid email", "Email format is invalid"));
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.is_empty() {
        errors.push(FieldError::new(
            "password",
            "Invalid password",
            "Password is required",
        ));
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            "Invalid password",
            &format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), RemoError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RemoError::InvalidForm(errors))
    }
}

pub fn validate_login_form(email: &str, password: &str) -> Result<(), RemoError> {
    let mut errors = Vec::new();
    check_email(email, &mut errors);
    check_password(password, &mut errors);
    finish(errors)
}

pub fn validate_signup_form(name: &str, email: &str, password: &str) -> Result<(), RemoError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Invalid name", "Name is required"));
    }
    check_email(email, &mut errors);
    check_password(password, &mut errors);
    finish(errors)
}

pub fn validate_admin_form(username: &str, password: &str) -> Result<(), RemoError> {
    let mut errors = Vec::new();
    if username.is_empty() {
        errors.push(FieldError::new(
            "username",
            "Invalid username",
            "Username is required",
        ));
    }
    if password.is_empty() {
        errors.push(FieldError::new(
            "password",
            "Invalid password",
            "Password is required",
        ));
    }
    finish(errors)
}

/// Rejects empty or whitespace-only values for a single named field.
pub fn require_text(field: &str, value: &str) -> Result<(), RemoError> {
    if value.trim().is_empty() {
        return Err(RemoError::InvalidInput(
            field.to_string(),
            FieldError::new(
                field,
                &format!("Invalid {}", field),
                &format!("{} cannot be empty", field),
            ),
        ));
    }
    Ok(())
}
