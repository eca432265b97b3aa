//! Tests for AddressBook add/delete/change/search operations.

use assistant_bot::{AddressBook, BookError, SearchMatch, ValidationError};

mod fixtures;
use fixtures::*;

#[test]
fn test_duplicate_name_keeps_original_record() {
    let mut book = AddressBook::new();
    book.add_record("Alice", "1234567890", None).unwrap();

    let result = book.add_record("Alice", "0987654321", None);
    assert_eq!(result, Err(BookError::DuplicateName("Alice".to_string())));

    assert_eq!(book.len(), 1);
    assert_eq!(book.get("Alice").unwrap().phones_text(), "1234567890");
}

#[test]
fn test_names_are_case_sensitive_keys() {
    let mut book = AddressBook::new();
    book.add_record("Alice", "1234567890", None).unwrap();
    book.add_record("alice", "0987654321", None).unwrap();
    assert_eq!(book.len(), 2);
}

#[test]
fn test_invalid_phone_aborts_add() {
    let mut book = AddressBook::new();
    let result = book.add_record("Alice", "12345", None);

    assert_eq!(
        result,
        Err(BookError::Validation(ValidationError::InvalidPhone(
            "12345".to_string()
        )))
    );
    assert!(!book.contains("Alice"));
}

#[test]
fn test_every_key_matches_its_record_name() {
    let book = sample_book(&[
        ("Anna", "1112223333", None),
        ("Dan", "4445556666", Some("01-01-1990")),
    ]);
    for name in ["Anna", "Dan"] {
        assert_eq!(book.get(name).unwrap().name().as_str(), name);
    }
}

#[test]
fn test_delete_by_name() {
    let mut book = sample_book(&[("Anna", "1112223333", None)]);

    let removed = book.delete_by_name("Anna").unwrap();
    assert_eq!(removed.name().as_str(), "Anna");
    assert!(book.is_empty());

    assert_eq!(
        book.delete_by_name("Anna").unwrap_err(),
        BookError::ContactNotFound("Anna".to_string())
    );
}

#[test]
fn test_delete_by_name_keeps_index_and_order_in_step() {
    let mut book = AddressBook::new();
    for i in 0..200u32 {
        book.add_record(&format!("C{i}"), &format!("{:010}", i), None)
            .unwrap();
    }
    for i in (0..200u32).step_by(2) {
        book.delete_by_name(&format!("C{i}")).unwrap();
    }

    assert_eq!(book.len(), 100);
    assert!(book.get("C0").is_none());
    assert_eq!(book.get("C199").unwrap().phones_text(), "0000000199");

    let names: Vec<String> = book.iter().map(|r| r.name().to_string()).collect();
    let expected: Vec<String> = (1..200u32).step_by(2).map(|i| format!("C{i}")).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_delete_by_phone_unknown_number() {
    let mut book = sample_book(&[("Anna", "1112223333", None)]);

    let err = book.delete_by_phone("0000000000").unwrap_err();
    assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
    assert!(err.is_not_found());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_delete_by_phone_removes_exactly_one() {
    let mut book = sample_book(&[
        ("Anna", "1112223333", None),
        ("Dan", "4445556666", None),
    ]);

    book.delete_by_phone("4445556666").unwrap();
    assert_eq!(book.len(), 1);
    assert!(!book.contains("Dan"));
    assert!(book.contains("Anna"));
}

#[test]
fn test_delete_by_phone_takes_first_in_insertion_order() {
    let mut book = sample_book(&[
        ("Zed", "1112223333", None),
        ("Amy", "1112223333", None),
    ]);

    book.delete_by_phone("1112223333").unwrap();
    assert_eq!(names(book.iter()), vec!["Amy".to_string()]);
}

#[test]
fn test_change_phone_replaces_whole_list() {
    let mut book = sample_book(&[("Bob", "1110002222", None)]);
    book.add_phone("Bob", "3334445555").unwrap();

    book.change_phone("Bob", "5551234567").unwrap();
    assert_eq!(book.get("Bob").unwrap().phones_text(), "5551234567");
}

#[test]
fn test_change_phone_failures() {
    let mut book = sample_book(&[("Bob", "1110002222", None)]);

    assert_eq!(
        book.change_phone("Nobody", "5551234567"),
        Err(BookError::ContactNotFound("Nobody".to_string()))
    );
    assert!(book.change_phone("Bob", "555").is_err());
    assert_eq!(book.get("Bob").unwrap().phones_text(), "1110002222");
}

#[test]
fn test_search_matches_names_by_substring() {
    let book = sample_book(&[
        ("Anna", "1112223333", None),
        ("Dan", "4445556666", None),
    ]);

    let matches = book.search("an").unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches!(&matches[0], SearchMatch::Name { name, phones }
        if name.as_str() == "Anna" && phones.len() == 1 && phones[0].as_str() == "1112223333"));
    assert!(matches!(&matches[1], SearchMatch::Name { name, phones }
        if name.as_str() == "Dan" && phones[0].as_str() == "4445556666"));
}

#[test]
fn test_search_falls_back_to_first_matching_phone() {
    let mut book = sample_book(&[("Eve", "1112223333", None)]);
    book.add_phone("Eve", "9992223333").unwrap();

    let matches = book.search("2223333").unwrap();
    assert_eq!(matches.len(), 1);
    match &matches[0] {
        SearchMatch::Phone { name, phone } => {
            assert_eq!(name.as_str(), "Eve");
            assert_eq!(phone.as_str(), "1112223333");
        }
        other => panic!("Expected phone match, got: {:?}", other),
    }
}

#[test]
fn test_search_with_no_match_is_empty() {
    let book = sample_book(&[("Anna", "1112223333", None)]);
    assert!(book.search("xyz").unwrap().is_empty());
    assert!(AddressBook::new().search("a").unwrap().is_empty());
}

#[test]
fn test_search_with_invalid_pattern() {
    let book = sample_book(&[("Anna", "1112223333", None)]);
    let err = book.search("[").unwrap_err();
    assert!(matches!(
        err,
        BookError::Validation(ValidationError::InvalidPattern(_))
    ));
}

#[test]
fn test_birthday_operations_through_book() {
    let mut book = sample_book(&[("Anna", "1112223333", None)]);

    book.add_birthday("Anna", "05-06-1990").unwrap();
    assert_eq!(
        book.add_birthday("Anna", "06-06-1990"),
        Err(BookError::BirthdayExists("Anna".to_string()))
    );

    book.change_birthday("Anna", "06-06-1990").unwrap();
    assert_eq!(
        book.get("Anna").unwrap().birthday_text().as_deref(),
        Some("06-06-1990")
    );

    assert_eq!(
        book.add_birthday("Nobody", "05-06-1990"),
        Err(BookError::ContactNotFound("Nobody".to_string()))
    );
}
