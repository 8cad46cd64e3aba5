use cdinventory_core::{
    insert, insert_with_policy, parse_record_id, remove_by_id, IdPolicy, Record, RecordStore,
    RemoveOutcome, TableError,
};
use std::error::Error;

fn sample_store() -> RecordStore {
    RecordStore::from(vec![
        Record::new(1, "Abbey Road", "The Beatles"),
        Record::new(2, "Thriller", "Michael Jackson"),
        Record::new(3, "Rumours", "Fleetwood Mac"),
    ])
}

#[test]
fn insert_appends_parsed_record_at_end() {
    let mut store = sample_store();

    let id = insert("42", "Blue", "Joni Mitchell", &mut store).unwrap();

    assert_eq!(id, 42);
    assert_eq!(store.len(), 4);
    assert_eq!(
        store.records().last().unwrap(),
        &Record::new(42, "Blue", "Joni Mitchell")
    );
}

#[test]
fn insert_trims_id_text_and_accepts_negative_ids() {
    let mut store = RecordStore::new();

    insert("  -8 ", "t", "a", &mut store).unwrap();

    assert_eq!(store.records()[0].id, -8);
}

#[test]
fn insert_rejects_non_integer_id_without_mutation() {
    let mut store = sample_store();

    for bad in ["abc", "", "1.5", "12a", "99999999999999999999"] {
        let err = insert(bad, "t", "a", &mut store).unwrap_err();
        assert!(
            matches!(err, TableError::InvalidId { .. }),
            "unexpected error for {bad:?}: {err}"
        );
        assert!(err.source().is_some());
    }
    assert_eq!(store, sample_store());
}

#[test]
fn insert_tolerates_duplicate_ids_by_default() {
    let mut store = sample_store();

    insert("1", "Let It Be", "The Beatles", &mut store).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.iter().filter(|record| record.id == 1).count(), 2);
}

#[test]
fn strict_policy_rejects_duplicate_ids() {
    let mut store = sample_store();

    let err = insert_with_policy("2", "Bad", "x", &mut store, IdPolicy::RejectDuplicates)
        .unwrap_err();
    assert_eq!(err, TableError::DuplicateId(2));
    assert_eq!(store, sample_store());

    insert_with_policy("4", "Good", "y", &mut store, IdPolicy::RejectDuplicates).unwrap();
    assert_eq!(store.len(), 4);
}

#[test]
fn remove_by_id_removes_single_match_and_keeps_order() {
    let mut store = sample_store();

    let outcome = remove_by_id("2", &mut store).unwrap();

    assert_eq!(
        outcome,
        RemoveOutcome::Removed(Record::new(2, "Thriller", "Michael Jackson"))
    );
    assert_eq!(
        store.records(),
        &[
            Record::new(1, "Abbey Road", "The Beatles"),
            Record::new(3, "Rumours", "Fleetwood Mac"),
        ]
    );
}

#[test]
fn remove_by_id_reports_not_found_without_mutation() {
    let mut store = sample_store();

    let outcome = remove_by_id("77", &mut store).unwrap();

    assert_eq!(outcome, RemoveOutcome::NotFound(77));
    assert!(!outcome.is_removed());
    assert_eq!(store, sample_store());
}

#[test]
fn remove_by_id_with_duplicates_removes_earliest_only() {
    let mut store = RecordStore::new();
    insert("9", "older", "a", &mut store).unwrap();
    insert("1", "middle", "b", &mut store).unwrap();
    insert("9", "newer", "c", &mut store).unwrap();

    let outcome = remove_by_id("9", &mut store).unwrap();

    assert!(matches!(outcome, RemoveOutcome::Removed(ref record) if record.title == "older"));
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].title, "middle");
    assert_eq!(store.records()[1].title, "newer");
}

#[test]
fn remove_by_id_rejects_non_integer_id_without_mutation() {
    let mut store = sample_store();

    let err = remove_by_id("one", &mut store).unwrap_err();

    assert!(matches!(err, TableError::InvalidId { ref input, .. } if input == "one"));
    assert_eq!(store, sample_store());
}

#[test]
fn parse_record_id_error_mentions_input() {
    let err = parse_record_id(" x1 ").unwrap_err();
    assert!(err.to_string().contains("`x1`"), "unexpected message: {err}");
}

#[test]
fn parse_record_id_accepts_sign_but_not_digit_separators() {
    assert_eq!(parse_record_id("+5").unwrap(), 5);
    assert_eq!(parse_record_id("-0").unwrap(), 0);
    assert!(parse_record_id("1_000").is_err());
    assert!(parse_record_id("9223372036854775808").is_err());
    assert_eq!(parse_record_id("9223372036854775807").unwrap(), i64::MAX);
}
