//! In-memory address book keyed by contact name.

use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::search::{RecordMatcher, SearchMatch};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Length of the default upcoming-birthday window, in days.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// The collection of contact records, keyed by unique name.
///
/// Records are kept in insertion order. Lookup by name goes through a hash
/// index and is O(1) expected. Removal by name also drops the record from the
/// ordered slot map, which costs O(log n); neither operation scans the book. Every mutation goes through a
/// method of this type; a record's key and its name are always equal.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<u64, Record>,
    index: HashMap<ContactName, u64>,
    next_slot: u64,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record named exactly `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).and_then(|slot| self.records.get(slot))
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Add a new contact with one phone and an optional birthday.
    ///
    /// Nothing is inserted unless every field validates.
    ///
    /// # Errors
    ///
    /// - `BookError::DuplicateName` if `name` is already taken; the existing
    ///   record is left as is.
    /// - `BookError::Validation` for an empty name, an invalid phone or an
    ///   invalid birthday.
    pub fn add_record(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> BookResult<()> {
        if self.contains(name) {
            return Err(BookError::DuplicateName(name.to_string()));
        }

        let mut record = Record::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        if let Some(text) = birthday {
            record.add_birthday(text)?;
        }

        self.insert(record);
        debug!(name = %name, total = self.len(), "Record added");
        Ok(())
    }

    /// Delete the record named `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete_by_name(&mut self, name: &str) -> BookResult<Record> {
        let slot = self
            .index
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        let record = self
            .records
            .remove(&slot)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        debug!(name = %name, total = self.len(), "Record deleted by name");
        Ok(record)
    }

    /// Delete the first record, in insertion order, that stores `phone`.
    ///
    /// Only that one record is removed even if others share the number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no record stores `phone`.
    pub fn delete_by_phone(&mut self, phone: &str) -> BookResult<Record> {
        let slot = self
            .records
            .iter()
            .find(|(_, record)| record.find_phone(phone))
            .map(|(slot, _)| *slot)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;

        let record = self
            .records
            .remove(&slot)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.index.remove(record.name().as_str());
        debug!(name = %record.name(), phone = %phone, "Record deleted by phone");
        Ok(record)
    }

    /// Replace the whole phone list of `name` with `[new_phone]`.
    ///
    /// # Errors
    ///
    /// - `BookError::ContactNotFound` if there is no such record.
    /// - `BookError::Validation` if `new_phone` is invalid; the old list is
    ///   kept.
    pub fn change_phone(&mut self, name: &str, new_phone: &str) -> BookResult<()> {
        self.record_mut(name)?.replace_phones(new_phone)?;
        Ok(())
    }

    /// Append a phone to an existing record.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.record_mut(name)?.add_phone(phone)?;
        Ok(())
    }

    /// Remove the first matching phone from an existing record.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound` or `BookError::PhoneNotFound`.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        if self.record_mut(name)?.remove_phone(phone) {
            Ok(())
        } else {
            Err(BookError::PhoneNotFound(phone.to_string()))
        }
    }

    /// Replace the first occurrence of `old` on an existing record.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound`, `BookError::PhoneNotFound`, or
    /// `BookError::Validation` when `new` is invalid.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        if self.record_mut(name)?.edit_phone(old, new)? {
            Ok(())
        } else {
            Err(BookError::PhoneNotFound(old.to_string()))
        }
    }

    /// Set the birthday of an existing record if it has none.
    ///
    /// # Errors
    ///
    /// `BookError::ContactNotFound`, `BookError::BirthdayExists`, or
    /// `BookError::Validation`.
    pub fn add_birthday(&mut self, name: &str, text: &str) -> BookResult<()> {
        self.record_mut(name)?.add_birthday(text)
    }

    /// Set or overwrite the birthday of an existing record.
    pub fn change_birthday(&mut self, name: &str, text: &str) -> BookResult<()> {
        self.record_mut(name)?.edit_birthday(text)?;
        Ok(())
    }

    /// Match `term` as an unanchored, case-insensitive regular expression
    /// against every record.
    ///
    /// A record matches on its name first. If the name does not match, the
    /// first matching phone is reported instead. Records with no match are
    /// left out. Results follow insertion order.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `term` is not a valid pattern.
    pub fn search(&self, term: &str) -> BookResult<Vec<SearchMatch>> {
        let matcher = RecordMatcher::new(term)?;
        let matches: Vec<SearchMatch> = self
            .iter()
            .filter_map(|record| matcher.match_record(record))
            .collect();
        debug!(term = %term, result_count = matches.len(), "Search completed");
        Ok(matches)
    }

    /// Records with a birthday in the 7-day window starting at `reference`.
    ///
    /// See [`AddressBook::upcoming_birthdays_within`].
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<&Record> {
        self.upcoming_birthdays_within(reference, UPCOMING_WINDOW_DAYS)
    }

    /// Records with a birthday in `[reference, reference + days)`.
    ///
    /// Only records whose stored birthday is strictly before `reference` are
    /// considered. Their month and day are stamped onto `reference`'s year,
    /// and the record is included when that date falls in the window. There
    /// is no wrap into the next year, and a 29 February birthday is skipped
    /// in a non-leap year.
    pub fn upcoming_birthdays_within(&self, reference: NaiveDate, days: u32) -> Vec<&Record> {
        let window_end = reference
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        self.iter()
            .filter(|record| match record.birthday() {
                Some(birthday) if birthday.date() < reference => birthday
                    .in_year(reference.year())
                    .is_some_and(|this_year| this_year >= reference && this_year < window_end),
                _ => false,
            })
            .collect()
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        let slot = self
            .index
            .get(name)
            .copied()
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.records
            .get_mut(&slot)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn insert(&mut self, record: Record) {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.index.insert(record.name().clone(), slot);
        self.records.insert(slot, record);
    }
}
