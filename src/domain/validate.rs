//! Field format checks
//!
//! Empty values always pass: whether a field is required is decided by the
//! operation, not by the format check.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// One local part, one `@`, and a domain containing at least one dot
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid phone '{0}': only digits are allowed")]
    InvalidPhone(String),

    #[error("Invalid email '{0}': expected name@domain.tld")]
    InvalidEmail(String),

    #[error("Invalid name {0:?}: line breaks are not allowed")]
    InvalidName(String),
}

/// Checks that a name fits on a single backing-file line
pub fn check_name(name: &str) -> Result<(), FieldError> {
    if name.contains(['\n', '\r']) {
        Err(FieldError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Checks that a non-empty phone is made of ASCII decimal digits
pub fn check_phone(phone: &str) -> Result<(), FieldError> {
    if phone.is_empty() || phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone(phone.to_string()))
    }
}

/// Checks that a non-empty email matches the address pattern
pub fn check_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() || EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_digits_only() {
        assert!(check_phone("3001234567").is_ok());
        assert!(check_phone("").is_ok());

        assert_eq!(
            check_phone("12a3"),
            Err(FieldError::InvalidPhone("12a3".to_string()))
        );
        assert!(check_phone("+57300").is_err());
        assert!(check_phone("300 123").is_err());
        assert!(check_phone("300-123").is_err());
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        assert!(check_phone("١٢٣").is_err());
    }

    #[test]
    fn name_single_line() {
        assert!(check_name("Ana G.").is_ok());
        assert!(check_name("  Ana, Maria ").is_ok());
        assert!(check_name("").is_ok());

        assert_eq!(
            check_name("Ana\nEvil"),
            Err(FieldError::InvalidName("Ana\nEvil".to_string()))
        );
        assert!(check_name("Ana\r").is_err());
    }

    #[test]
    fn email_pattern() {
        assert!(check_email("ana@x.com").is_ok());
        assert!(check_email("first.last@mail.example.org").is_ok());
        assert!(check_email("").is_ok());

        assert!(check_email("ana").is_err());
        assert!(check_email("ana@x").is_err());
        assert!(check_email("@x.com").is_err());
        assert!(check_email("ana@@x.com").is_err());
        assert!(check_email("ana @x.com").is_err());
        assert!(check_email("ana@x.").is_err());
    }
}
