mod common;

use common::wide_readings;
use partframe::{BooleanColumn, ColumnType, DataFrame, Error, MeltOptions, ValueCoercion, Value};

fn mixed() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_int_column("id", vec![1, 2]).unwrap();
    df.add_int_column("a", vec![11, 21]).unwrap();
    df.add_float_column("b", vec![1.5, 2.5]).unwrap();
    df.add_string_column("c", vec!["x".into(), "y".into()]).unwrap();
    df.add_column("d", BooleanColumn::new(vec![true, false])).unwrap();
    df
}

#[test]
fn test_melt_layout_and_order() {
    let df = wide_readings();
    let melted = df.melt(&MeltOptions::new(&["station"])).unwrap();

    assert_eq!(melted.column_names(), &["station", "variable", "value"]);
    assert_eq!(melted.row_count(), df.row_count() * 2);
    assert_eq!(melted.column_type("variable").unwrap(), ColumnType::String);
    assert_eq!(melted.column_type("value").unwrap(), ColumnType::Float64);

    let expected = [
        ("a", "t1", Some(1.5)),
        ("a", "t2", Some(2.5)),
        ("b", "t1", Some(3.0)),
        ("b", "t2", None),
        ("c", "t1", Some(4.0)),
        ("c", "t2", Some(5.0)),
    ];
    for (i, (station, variable, value)) in expected.iter().enumerate() {
        assert_eq!(melted.get_value(i, "station").unwrap(), Some(Value::from(*station)));
        assert_eq!(melted.get_value(i, "variable").unwrap(), Some(Value::from(*variable)));
        assert_eq!(melted.get_value(i, "value").unwrap(), value.map(Value::Float64));
    }
}

#[test]
fn test_melt_value_vars_follow_schema_order() {
    let df = mixed();
    let options = MeltOptions::new(&["id"]).value_vars(&["b", "a"]);
    let melted = df.melt(&options).unwrap();

    assert_eq!(melted.row_count(), 4);
    assert_eq!(melted.get_value(0, "variable").unwrap(), Some(Value::from("a")));
    assert_eq!(melted.get_value(1, "variable").unwrap(), Some(Value::from("b")));

    // Int64 with Float64 widens
    assert_eq!(melted.column_type("value").unwrap(), ColumnType::Float64);
    assert_eq!(melted.get_value(0, "value").unwrap(), Some(Value::Float64(11.0)));
    assert_eq!(melted.get_value(3, "value").unwrap(), Some(Value::Float64(2.5)));
}

#[test]
fn test_melt_mixed_types_render_to_string() {
    let df = mixed();
    let melted = df.unpivot(&["id"], None).unwrap();

    assert_eq!(melted.row_count(), 8);
    assert_eq!(melted.column_type("value").unwrap(), ColumnType::String);
    let values: Vec<Option<Value>> = (0..4)
        .map(|i| melted.get_value(i, "value").unwrap())
        .collect();
    assert_eq!(
        values,
        vec![
            Some(Value::from("11")),
            Some(Value::from("1.5")),
            Some(Value::from("x")),
            Some(Value::from("true")),
        ]
    );
}

#[test]
fn test_melt_strict_rejects_mixed_types() {
    let df = mixed();
    let options = MeltOptions::new(&["id"])
        .value_vars(&["a", "b"])
        .coercion(ValueCoercion::Strict);
    match df.melt(&options) {
        Err(Error::IncompatibleValueTypes(types)) => {
            assert_eq!(types, vec![ColumnType::Int64, ColumnType::Float64])
        }
        other => panic!("expected IncompatibleValueTypes, got {:?}", other),
    }

    // Uniform types pass under strict coercion
    let options = MeltOptions::new(&["id"])
        .value_vars(&["a"])
        .coercion(ValueCoercion::Strict);
    assert_eq!(df.melt(&options).unwrap().row_count(), 2);
}

#[test]
fn test_melt_custom_names() {
    let df = wide_readings();
    let options = MeltOptions {
        var_name: "sensor".to_string(),
        value_name: "reading".to_string(),
        ..MeltOptions::new(&["station"])
    };
    let melted = df.melt(&options).unwrap();
    assert_eq!(melted.column_names(), &["station", "sensor", "reading"]);

    let clashing = MeltOptions {
        var_name: "station".to_string(),
        ..MeltOptions::new(&["station"])
    };
    assert!(matches!(
        df.melt(&clashing),
        Err(Error::DuplicateColumnName(_))
    ));
}

#[test]
fn test_melt_without_id_columns() {
    let df = wide_readings().select_columns(&["t1", "t2"]).unwrap();
    let melted = df.unpivot(&[], None).unwrap();
    assert_eq!(melted.column_names(), &["variable", "value"]);
    assert_eq!(melted.row_count(), 6);
}

#[test]
fn test_melt_zero_rows() {
    let df = wide_readings().select_rows_by_indices(&[]).unwrap();
    let melted = df.unpivot(&["station"], None).unwrap();
    assert_eq!(melted.row_count(), 0);
    assert_eq!(melted.column_names(), &["station", "variable", "value"]);
}

#[test]
fn test_melt_errors() {
    let df = wide_readings();

    assert!(matches!(
        df.unpivot(&["station"], Some(&["station", "t1"][..])),
        Err(Error::ColumnSetOverlap(name)) if name == "station"
    ));
    assert!(matches!(
        df.unpivot(&["nope"], None),
        Err(Error::UnknownColumn(_))
    ));
    assert!(matches!(
        df.unpivot(&["station"], Some(&["t9"][..])),
        Err(Error::UnknownColumn(_))
    ));
    assert!(matches!(
        df.unpivot(&["station", "t1", "t2"], None),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        df.unpivot(&["station"], Some(&["t1", "t1"][..])),
        Err(Error::InvalidInput(_))
    ));
}
