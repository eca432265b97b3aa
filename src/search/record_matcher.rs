//! Regex term matching over contact records.
//!
//! A search term is compiled once as a case-insensitive regular expression
//! and tested, unanchored, against each record's name and then its phone
//! numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::models::Record;
use regex::{Regex, RegexBuilder};

/// One record matched by a search term.
///
/// The two variants carry different payloads: a name match carries the full
/// phone list, a phone match carries only the first phone that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMatch {
    /// The term matched the contact's name
    Name {
        name: ContactName,
        phones: Vec<PhoneNumber>,
    },

    /// The term did not match the name but matched one of the phones
    Phone {
        name: ContactName,
        phone: PhoneNumber,
    },
}

impl SearchMatch {
    /// Name of the matched contact.
    pub fn name(&self) -> &ContactName {
        match self {
            Self::Name { name, .. } | Self::Phone { name, .. } => name,
        }
    }

    /// Phone numbers carried by this match, joined for display.
    pub fn phones_text(&self) -> String {
        match self {
            Self::Name { phones, .. } => phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Phone { phone, .. } => phone.to_string(),
        }
    }
}

/// Compiled search term.
#[derive(Debug, Clone)]
pub struct RecordMatcher {
    pattern: Regex,
}

impl RecordMatcher {
    /// Compile `term` as a case-insensitive regular expression.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPattern` when `term` is not a valid
    /// regular expression.
    pub fn new(term: &str) -> Result<Self, ValidationError> {
        let pattern = RegexBuilder::new(term)
            .case_insensitive(true)
            .build()
            .map_err(|e| ValidationError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Match one record: name first, then the first matching phone.
    pub fn match_record(&self, record: &Record) -> Option<SearchMatch> {
        if self.pattern.is_match(record.name().as_str()) {
            return Some(SearchMatch::Name {
                name: record.name().clone(),
                phones: record.phones().to_vec(),
            });
        }

        record
            .phones()
            .iter()
            .find(|phone| self.pattern.is_match(phone.as_str()))
            .map(|phone| SearchMatch::Phone {
                name: record.name().clone(),
                phone: phone.clone(),
            })
    }
}
