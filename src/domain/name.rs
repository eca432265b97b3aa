//! ContactName value object.

use super::errors::ValidationError;
use std::borrow::Borrow;
use std::fmt;

/// The identifying name of a contact.
///
/// Names are the unique key of the address book. Matching is exact and
/// case-sensitive, so `"alice"` and `"Alice"` are two different contacts.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::ContactName;
///
/// let name = ContactName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
