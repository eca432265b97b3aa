//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable builders for records, populated address
//! books and routers with a fixed clock.

use assistant_bot::{AddressBook, CommandRouter, ContactName, Record};
use chrono::NaiveDate;

/// Build a calendar date, panicking on an impossible one.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create a sample record with the given phones and no birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("valid test name"));
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    record
}

/// Create a book holding `(name, phone, birthday)` entries in order.
#[allow(dead_code)]
pub fn sample_book(entries: &[(&str, &str, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone, birthday) in entries {
        book.add_record(name, phone, *birthday)
            .expect("valid test record");
    }
    book
}

/// Names of `records`, in order.
#[allow(dead_code)]
pub fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records
        .into_iter()
        .map(|record| record.name().to_string())
        .collect()
}

/// A router over an empty book whose "today" is fixed.
#[allow(dead_code)]
pub fn router_on(today: NaiveDate) -> CommandRouter {
    CommandRouter::new(AddressBook::new()).with_clock(move || today)
}

/// Send one line to `router` and return the reply text.
#[allow(dead_code)]
pub fn send(router: &mut CommandRouter, line: &str) -> String {
    router
        .handle_line(line)
        .map(|reply| reply.text().to_string())
        .unwrap_or_default()
}
