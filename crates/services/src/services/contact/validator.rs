use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::types::{ContactPayload, ContactSubmission};

// local@domain.tld, no whitespace anywhere
#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Why a submission was rejected. The display text is sent to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

pub struct ContactValidator;

impl ContactValidator {
    /// Check required fields first, then the email shape.
    pub fn validate(payload: ContactPayload) -> Result<ContactSubmission, ValidationError> {
        let (Some(name), Some(email), Some(message)) = (
            non_blank(payload.name),
            non_blank(payload.email),
            non_blank(payload.message),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        if !Self::is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name: name.trim().to_string(),
            email,
            message: message.trim().to_string(),
        })
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
