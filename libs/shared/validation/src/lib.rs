//! Field-level validation rules shared by the booking cells.
//!
//! All checks are pure predicates over a single input; registration-style
//! aggregate validation short-circuits on the first failing field.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_NAME_LEN: usize = 3;

// Same shape the upstream registration form accepts: one '@', non-empty
// local part, domain containing a dot with non-empty segments.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("name too short")]
    NameTooShort,

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid phone")]
    InvalidPhone,

    #[error("invalid or past date/time")]
    InvalidDateTime,

    #[error("required fields missing")]
    MissingFields,
}

/// A name is valid when it still has at least three characters after
/// trimming surrounding whitespace.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Phones are checked on their normalized form: exactly 10 ASCII digits
/// once whitespace and hyphen separators are stripped.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let normalized = normalize_phone(phone);
    if !PHONE_RE.is_match(&normalized) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// A bookable instant must lie strictly in the future.
pub fn validate_future_instant(
    instant: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if instant <= now {
        return Err(ValidationError::InvalidDateTime);
    }
    Ok(())
}

/// Stored/compared form of an email: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Stored form of a phone number: whitespace and hyphens stripped.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Aggregate rule set for patient registration. Fields are checked in
/// name, email, phone order and the first failure is reported.
pub fn validate_registration(name: &str, email: &str, phone: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_phone(phone)?;
    Ok(())
}
