//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};

/// A single contact: a name, its phone numbers and an optional birthday.
///
/// Every stored phone number is valid at all times; operations that take
/// new input validate it before touching `phones`. Duplicate numbers are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Stored phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves `phones` unchanged
    /// when `number` is not 10 ASCII digits.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first stored phone equal to `number`.
    ///
    /// Returns `false` when no such phone is stored.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.position_of(number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first stored phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when `old` is not stored; `new` is only validated
    /// once `old` has been found.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when `new` is invalid. The
    /// old value stays in place.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.position_of(old) {
            Some(index) => {
                self.phones[index].set(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether `number` is stored on this record.
    pub fn find_phone(&self, number: &str) -> bool {
        self.position_of(number).is_some()
    }

    /// Replace the whole phone list with the single number `number`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and keeps the old list when
    /// `number` is invalid.
    pub fn replace_phones(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Set the birthday from `DD-MM-YYYY` text if none is set yet.
    ///
    /// # Errors
    ///
    /// - `BookError::BirthdayExists` when a birthday is already stored; the
    ///   stored value is not touched.
    /// - `BookError::Validation` when `text` is not a real date.
    pub fn add_birthday(&mut self, text: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayExists(self.name.to_string()));
        }
        self.birthday = Some(Birthday::parse(text)?);
        Ok(())
    }

    /// Set or overwrite the birthday from `DD-MM-YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` and keeps the old birthday when
    /// `text` is not a real date.
    pub fn edit_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set(text),
            None => {
                self.birthday = Some(Birthday::parse(text)?);
                Ok(())
            }
        }
    }

    /// The birthday formatted as `DD-MM-YYYY`, or `None` when unset.
    pub fn birthday_text(&self) -> Option<String> {
        self.birthday.map(|b| b.to_string())
    }

    /// Phone numbers joined with `", "` for display.
    pub fn phones_text(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == number)
    }
}
