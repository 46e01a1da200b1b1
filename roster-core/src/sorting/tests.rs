//! Tests for ordering strategy implementations

use crate::sorting::{
    FieldSort, IdField, NameField, OrderingStrategy, RandomOrder, SortCost,
    TimestampField, shuffle, sort_by_heap, sort_by_name, sort_by_timestamp,
};
use crate::OrderingError;
use roster_model::{Record, RecordBuilder};

fn create_test_member(id: &str, name: &str, timestamp: &str) -> Record {
    RecordBuilder::new()
        .id(id)
        .name(name)
        .first_name("Alex")
        .email(format!("{id}@example.org"))
        .timestamp(timestamp)
        .build()
}

fn names(records: &[Record]) -> Vec<&str> {
    records.iter().filter_map(Record::name).collect()
}

fn members() -> Vec<Record> {
    vec![
        create_test_member("3", "Charlie", "2024-01-01 10:00:00"),
        create_test_member("1", "Alice", "2024-06-01 09:00:00"),
        create_test_member("2", "Bob", "2023-12-31 23:59:59"),
    ]
}

#[test]
fn test_field_sort_by_name() {
    let mut records = members();

    let sort = FieldSort::new(NameField, false);
    sort.apply(&mut records).unwrap();

    assert_eq!(names(&records), vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_field_sort_reverse() {
    let mut records = members();

    let sort = FieldSort::new(NameField, true);
    sort.apply(&mut records).unwrap();

    assert_eq!(names(&records), vec!["Charlie", "Bob", "Alice"]);
}

#[test]
fn test_field_sort_by_id() {
    let mut records = members();

    FieldSort::new(IdField, false).apply(&mut records).unwrap();

    assert_eq!(names(&records), vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_timestamp_newest_first() {
    let mut records = members();

    sort_by_timestamp(&mut records).unwrap();

    let stamps: Vec<_> = records.iter().filter_map(Record::timestamp).collect();
    assert_eq!(
        stamps,
        vec![
            "2024-06-01 09:00:00",
            "2024-01-01 10:00:00",
            "2023-12-31 23:59:59"
        ]
    );
}

#[test]
fn test_malformed_timestamp_is_rejected() {
    let mut records = members();
    records.push(create_test_member("4", "Dora", "01.02.2024 um 10:00 Uhr"));
    let before = records.clone();

    let err = sort_by_timestamp(&mut records).unwrap_err();

    assert!(matches!(
        err,
        OrderingError::InvalidKey {
            index: 3,
            field: "timestamp",
            ..
        }
    ));
    assert_eq!(records, before);
}

#[test]
fn test_missing_name_is_rejected() {
    let mut records = members();
    records.insert(1, RecordBuilder::new().id("9").build());

    let err = sort_by_name(&mut records, true).unwrap_err();

    assert_eq!(
        err,
        OrderingError::MissingField {
            index: 1,
            field: "name"
        }
    );
}

#[test]
fn test_case_sensitive_code_point_order() {
    let mut records = vec![
        create_test_member("1", "zeta", "2024-01-01 00:00:00"),
        create_test_member("2", "Zeta", "2024-01-01 00:00:00"),
        create_test_member("3", "Émile", "2024-01-01 00:00:00"),
        create_test_member("4", "alpha", "2024-01-01 00:00:00"),
    ];

    sort_by_name(&mut records, true).unwrap();

    assert_eq!(names(&records), vec!["Zeta", "alpha", "zeta", "Émile"]);
}

#[test]
fn test_heap_sort_example() {
    let mut records: Vec<Record> = ["5", "3", "8", "1", "9", "2"]
        .into_iter()
        .map(|id| create_test_member(id, "Member", "2024-01-01 00:00:00"))
        .collect();

    let steps = sort_by_heap(&mut records).unwrap();

    let ids: Vec<String> =
        records.iter().map(|r| r.id().unwrap().to_string()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "5", "8", "9"]);
    assert_eq!(steps, 13);
}

#[test]
fn test_empty_and_singleton_sequences() {
    let mut empty: Vec<Record> = Vec::new();
    assert_eq!(sort_by_heap(&mut empty).unwrap(), 0);
    sort_by_name(&mut empty, true).unwrap();
    sort_by_name(&mut empty, false).unwrap();
    sort_by_timestamp(&mut empty).unwrap();
    shuffle(&mut empty);
    assert!(empty.is_empty());

    let single = vec![create_test_member("1", "Solo", "2024-01-01 00:00:00")];
    let mut records = single.clone();
    assert_eq!(sort_by_heap(&mut records).unwrap(), 0);
    sort_by_name(&mut records, true).unwrap();
    sort_by_name(&mut records, false).unwrap();
    sort_by_timestamp(&mut records).unwrap();
    shuffle(&mut records);
    assert_eq!(records, single);
}

#[test]
fn test_sort_cost_estimates() {
    assert_eq!(
        FieldSort::new(NameField, false).cost_estimate(),
        SortCost::Moderate
    );
    assert_eq!(
        FieldSort::new(TimestampField, true).cost_estimate(),
        SortCost::Moderate
    );
    assert_eq!(RandomOrder::new().cost_estimate(), SortCost::Cheap);
    assert!(SortCost::Cheap < SortCost::Moderate);
}

#[test]
fn test_boxed_strategies_share_one_interface() {
    let strategies: Vec<Box<dyn OrderingStrategy>> = vec![
        Box::new(FieldSort::new(NameField, false)),
        Box::new(FieldSort::new(TimestampField, true)),
        Box::new(RandomOrder::seeded(3)),
    ];

    for strategy in strategies {
        let mut records = members();
        strategy.apply(&mut records).unwrap();
        assert_eq!(records.len(), 3);
    }
}
