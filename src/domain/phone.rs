//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A phone number of exactly 10 ASCII digits.
///
/// Validation runs on construction and on every [`PhoneNumber::set`]. A failed
/// `set` keeps the previous value.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// 10 ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Check a candidate value without constructing a PhoneNumber.
    pub fn validate(phone: &str) -> Result<(), ValidationError> {
        if PHONE_REGEX.is_match(phone) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(phone.to_string()))
        }
    }

    /// Replace the stored number. The old value is kept on failure.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        self.0 = phone;
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
