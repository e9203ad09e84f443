mod common;

use std::collections::HashMap;

use common::mtcars_sample;
use partframe::{DataFrame, Error, KeyTuple, Value};

/// Row multiset of a frame
fn row_counts(df: &DataFrame) -> HashMap<Vec<Option<Value>>, usize> {
    let mut counts = HashMap::new();
    for row in df.rows() {
        *counts.entry(row).or_insert(0) += 1;
    }
    counts
}

/// Frame large enough to cross a small parallel threshold
fn synthetic(n_rows: usize) -> DataFrame {
    let mut df = DataFrame::new();
    df.add_int_column("id", (0..n_rows as i64).collect()).unwrap();
    df.add_int_column("bucket", (0..n_rows as i64).map(|i| (i * 7) % 13).collect())
        .unwrap();
    df.add_string_column(
        "parity",
        (0..n_rows)
            .map(|i| if i % 2 == 0 { "even" } else { "odd" }.to_string())
            .collect(),
    )
    .unwrap();
    df
}

#[test]
fn test_partitions_cover_every_row_once() {
    let df = mtcars_sample();
    let parts = df.partition_by(&["cyl", "gear"]).unwrap();

    let total: usize = parts.iter().map(|(_, part)| part.row_count()).sum();
    assert_eq!(total, df.row_count());

    let mut combined = HashMap::new();
    for (key, part) in &parts {
        assert_eq!(part.column_names(), df.column_names());
        for row in part.rows() {
            // Key columns of every row equal the partition key
            assert_eq!(&row[1..3], key.values());
            *combined.entry(row).or_insert(0) += 1;
        }
    }
    assert_eq!(combined, row_counts(&df));
}

#[test]
fn test_filter_keeps_row_order() {
    let df = mtcars_sample();
    let key = KeyTuple::from(vec![Value::Int64(4), Value::Int64(4)]);
    let part = df.filter_by_key(&["cyl", "gear"], &key).unwrap();

    assert_eq!(part.row_count(), 2);
    assert_eq!(part.get_value(0, "model").unwrap(), Some(Value::from("Datsun 710")));
    assert_eq!(part.get_value(1, "model").unwrap(), Some(Value::from("Merc 240D")));
}

#[test]
fn test_filter_with_absent_or_mistyped_key() {
    let df = mtcars_sample();

    let absent = KeyTuple::from(vec![Value::Int64(8), Value::Int64(5)]);
    let part = df.filter_by_key(&["cyl", "gear"], &absent).unwrap();
    assert_eq!(part.row_count(), 0);
    assert_eq!(part.schema(), df.schema());

    // A key of another type matches nothing
    let mistyped = KeyTuple::from(vec![Value::from("6"), Value::Int64(4)]);
    let part = df.filter_by_key(&["cyl", "gear"], &mistyped).unwrap();
    assert_eq!(part.row_count(), 0);
}

#[test]
fn test_filter_key_arity() {
    let df = mtcars_sample();
    let key = KeyTuple::from(vec![Value::Int64(6)]);
    assert!(matches!(
        df.filter_by_key(&["cyl", "gear"], &key),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn test_regroup_orders_by_first_occurrence() {
    let df = mtcars_sample();
    let regrouped = df.regroup(&["cyl", "gear"]).unwrap();

    let models: Vec<Option<Value>> = (0..regrouped.row_count())
        .map(|i| regrouped.get_value(i, "model").unwrap())
        .collect();
    let expected: Vec<Option<Value>> = [
        "Mazda RX4",
        "Mazda RX4 Wag",
        "Datsun 710",
        "Merc 240D",
        "Hornet 4 Drive",
        "Valiant",
    ]
    .iter()
    .map(|&m| Some(Value::from(m)))
    .collect();
    assert_eq!(models, expected);
    assert_eq!(row_counts(&regrouped), row_counts(&df));
}

#[test]
fn test_parallel_matches_sequential() {
    let df = synthetic(500);
    let sequential = df.partition_by(&["bucket", "parity"]).unwrap();
    // Threshold 0 forces the rayon path
    let parallel = df
        .par_partition_by_with_threshold(&["bucket", "parity"], 0)
        .unwrap();

    assert_eq!(sequential.len(), 26);
    assert_eq!(sequential, parallel);

    assert_eq!(
        df.par_regroup(&["bucket", "parity"], 0).unwrap(),
        df.regroup(&["bucket", "parity"]).unwrap()
    );
}

#[test]
fn test_parallel_below_threshold() {
    let df = synthetic(100);
    let parts = df.par_partition_by(&["parity"]).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].0, KeyTuple::from(vec![Value::from("even")]));
    assert_eq!(parts[0].1.row_count(), 50);
}

#[test]
fn test_parallel_unknown_column() {
    let df = synthetic(10);
    assert!(matches!(
        df.par_partition_by_with_threshold(&["nope"], 0),
        Err(Error::UnknownColumn(_))
    ));
}
