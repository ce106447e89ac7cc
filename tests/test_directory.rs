//! Integration tests for directory and record operations.
//!
//! These tests drive the public API the way a caller would: build records,
//! move them into a directory, then edit, look up, and delete them.

use contact_book::{Directory, Phone, Record, RecordError, ValidationError};

fn sample_directory() -> Directory {
    let mut book = Directory::new();

    let mut john = Record::new("John").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    john.add_birthday("20.05.1990").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane").unwrap();
    jane.add_phone("9876543210").unwrap();
    jane.add_birthday("22.05.1990").unwrap();
    book.add_record(jane);

    book
}

#[test]
fn test_walkthrough_edit_find_delete() {
    let mut book = sample_directory();
    assert_eq!(book.len(), 2);

    let mut john = book.find_mut("John").expect("John should be present");
    assert_eq!(john.edit_phone("1234567890", "1112223333"), Ok(1));
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333; 5555555555, birthday: 20.05.1990"
    );
    assert_eq!(
        john.find_phone("5555555555").map(Phone::as_str),
        Some("5555555555")
    );

    assert!(book.delete("Jane"));
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_delete_absent_name_keeps_size() {
    let mut book = sample_directory();
    let before = book.len();

    assert!(!book.delete("Nobody"));
    assert_eq!(book.len(), before);

    assert!(book.delete("John"));
    assert_eq!(book.len(), before - 1);
}

#[test]
fn test_duplicate_name_replaces_record() {
    let mut book = sample_directory();

    let mut second = Record::new("Jane").unwrap();
    second.add_phone("0000000000").unwrap();
    let replaced = book.add_record(second.clone());

    assert!(replaced.is_some());
    assert_eq!(book.len(), 2);
    let jane = book.find("Jane").unwrap();
    assert_eq!(jane, &second);
    assert!(jane.birthday().is_none());
}

#[test]
fn test_error_kinds_propagate_to_caller() {
    let mut record = Record::new("Lary").unwrap();

    assert_eq!(
        record.add_phone("777"),
        Err(ValidationError::InvalidPhoneFormat("777".to_string()))
    );
    assert_eq!(
        record.add_birthday("32.01.2000"),
        Err(RecordError::Validation(ValidationError::InvalidDateFormat(
            "32.01.2000".to_string()
        )))
    );

    record.add_birthday("21.05.2000").unwrap();
    assert!(matches!(
        record.add_birthday("21.05.2000"),
        Err(RecordError::BirthdayAlreadySet { .. })
    ));
}

#[test]
fn test_records_iterate_in_insertion_order() {
    let book = sample_directory();
    let names: Vec<String> = book.records().map(|r| r.name().to_string()).collect();
    assert_eq!(names, ["John", "Jane"]);
}
