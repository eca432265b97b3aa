//! Tests for Record field validation and phone/birthday operations.
//!
//! These tests validate:
//! - Phone numbers are exactly 10 ASCII digits
//! - Failed updates leave the record unchanged
//! - Birthdays are added once and only overwritten by an explicit edit

use assistant_bot::{BookError, PhoneNumber, ValidationError};

mod fixtures;
use fixtures::*;

#[test]
fn test_every_ten_digit_string_is_a_valid_phone() {
    for phone in ["0000000000", "1234567890", "9999999999", "0501112233"] {
        let parsed = PhoneNumber::new(phone).unwrap();
        assert_eq!(parsed.as_str(), phone);
    }
}

#[test]
fn test_wrong_length_or_non_digit_phone_is_rejected() {
    for phone in ["", "1", "123456789", "12345678901", "12345 7890", "12345678x0", "+380501112"] {
        assert_eq!(
            PhoneNumber::new(phone),
            Err(ValidationError::InvalidPhone(phone.to_string())),
            "{:?} should be rejected",
            phone
        );
    }
}

#[test]
fn test_phones_stay_valid_after_failed_operations() {
    let mut record = sample_record("Alice", &["1111111111", "2222222222"]);

    assert!(record.add_phone("abc").is_err());
    assert!(record.edit_phone("1111111111", "333").is_err());
    assert!(record.replace_phones("").is_err());

    assert_eq!(record.phones_text(), "1111111111, 2222222222");
    assert!(record
        .phones()
        .iter()
        .all(|phone| PhoneNumber::validate(phone.as_str()).is_ok()));
}

#[test]
fn test_remove_and_find_phone_report_outcomes() {
    let mut record = sample_record("Alice", &["1111111111"]);

    assert!(record.find_phone("1111111111"));
    assert!(record.remove_phone("1111111111"));
    assert!(!record.find_phone("1111111111"));
    assert!(!record.remove_phone("1111111111"));
}

#[test]
fn test_add_birthday_then_refuse_second_add() {
    let mut record = sample_record("Alice", &["1111111111"]);
    record.add_birthday("05-06-1990").unwrap();

    assert_eq!(
        record.add_birthday("06-06-1990"),
        Err(BookError::BirthdayExists("Alice".to_string()))
    );
    assert_eq!(record.birthday_text().as_deref(), Some("05-06-1990"));
}

#[test]
fn test_invalid_birthday_is_a_validation_error() {
    let mut record = sample_record("Alice", &["1111111111"]);

    let err = record.add_birthday("1990-06-05").unwrap_err();
    assert_eq!(err.to_string(), "Invalid date format. Use DD-MM-YYYY");
    assert!(record.birthday().is_none());
}

#[test]
fn test_birthday_text_round_trips() {
    let mut record = sample_record("Alice", &["1111111111"]);
    record.add_birthday("29-02-2000").unwrap();

    assert_eq!(record.birthday_text().as_deref(), Some("29-02-2000"));
    assert_eq!(record.birthday().map(|b| b.date()), Some(date(2000, 2, 29)));
}
