// src/validate.rs
//
// Inline form checks. Errors are collected, never thrown; a form with any
// error is not saved or forwarded.

use std::fmt;

use crate::config::consts::{MOBILE_MAX_DIGITS, MOBILE_MIN_DIGITS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// Digits only, MOBILE_MIN_DIGITS..=MOBILE_MAX_DIGITS of them.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let m = mobile.trim();
    m.chars().all(|c| c.is_ascii_digit())
        && (MOBILE_MIN_DIGITS..=MOBILE_MAX_DIGITS).contains(&m.len())
}

pub fn check_mobile(errors: &mut Vec<FieldError>, field: &'static str, mobile: &str) {
    if !is_valid_mobile(mobile) {
        errors.push(FieldError::new(
            field,
            format!("Enter a valid mobile number ({MOBILE_MIN_DIGITS}-{MOBILE_MAX_DIGITS} digits)."),
        ));
    }
}
