//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Textual pattern used for every birthday read from or shown to the user.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

// chrono's `%Y` also takes signs, padding and short years; the text form does not.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$").expect("Failed to compile date regex")
});

/// A calendar date without a time component, written as `DD-MM-YYYY`.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
///
/// let birthday = Birthday::parse("05-06-1990").unwrap();
/// assert_eq!(birthday.to_string(), "05-06-1990");
/// assert!(Birthday::parse("31-02-1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for the wrong shape, year 0,
    /// or an impossible date such as `30-02-2001`.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate(text.to_string());
        if !DATE_SHAPE_REGEX.is_match(text) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())?;
        if date.year() < 1 {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    /// Replace the stored date from text. The old value is kept on failure.
    pub fn set(&mut self, text: &str) -> Result<(), ValidationError> {
        *self = Self::parse(text)?;
        Ok(())
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day stamped onto `year`.
    ///
    /// Returns `None` when the day does not exist in that year (29 February
    /// in a non-leap year).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
