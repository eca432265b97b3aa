//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD-MM-YYYY` date.
    InvalidDate(String),

    /// The provided search term is not a valid pattern.
    InvalidPattern(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone number must be exactly 10 digits."),
            Self::InvalidDate(_) => write!(f, "Invalid date format. Use DD-MM-YYYY"),
            Self::InvalidPattern(reason) => write!(f, "Invalid search term: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
