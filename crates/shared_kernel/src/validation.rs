//! Email address validation
//!
//! Pragmatic pattern: accepts the addresses people actually use and rejects
//! the obviously malformed ones. Not a full RFC 5322 parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CoreError;

/// RFC 5321 limit on the length of a forward path
const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$",
    )
    .expect("Invalid email regex pattern")
});

pub struct EmailValidator;

impl EmailValidator {
    /// Returns true if `email` is a plausible address
    pub fn is_valid(email: &str) -> bool {
        if email.trim().is_empty() || email.chars().count() > MAX_EMAIL_LENGTH {
            return false;
        }
        EMAIL_PATTERN.is_match(email)
    }

    /// Validates `email`, naming `field_name` in the error message
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the address is not valid.
    pub fn validate(email: &str, field_name: &str) -> Result<(), CoreError> {
        if Self::is_valid(email) {
            Ok(())
        } else {
            tracing::debug!(field = field_name, "Rejected email address");
            Err(CoreError::validation(format!(
                "Invalid email address for field '{}': '{}'",
                field_name, email
            )))
        }
    }

    /// Validates `email` using the field name `email`
    pub fn validate_email(email: &str) -> Result<(), CoreError> {
        Self::validate(email, "email")
    }
}
