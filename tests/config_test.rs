mod common;

use std::fs;

use common::{wide_readings, TempTestFile};
use partframe::{ConflictPolicy, Error, ReshapeConfig, ValueCoercion, PARALLEL_THRESHOLD};

#[test]
fn test_load_config_file() {
    let file = TempTestFile::new("config", "toml");
    fs::write(
        file.path(),
        r#"
[csv]
has_header = false
delimiter = ";"
null_values = ["?"]

[melt]
var_name = "sensor"
value_name = "reading"
coercion = "strict"

[pivot]
conflict = "last"

[parallel]
row_threshold = 1000
"#,
    )
    .unwrap();

    let config = ReshapeConfig::from_file(file.path()).unwrap();
    let csv = config.csv_options();
    assert!(!csv.has_header);
    assert_eq!(csv.delimiter, ';');
    assert_eq!(csv.null_values, vec!["?".to_string()]);
    assert_eq!(config.melt.coercion, ValueCoercion::Strict);
    assert_eq!(config.pivot.conflict, ConflictPolicy::Last);
    assert_eq!(config.parallel.row_threshold, 1000);
}

#[test]
fn test_config_drives_melt_and_pivot() {
    let config = ReshapeConfig::from_toml_str(
        "[melt]\nvar_name = \"sensor\"\nvalue_name = \"reading\"\n",
    )
    .unwrap();
    assert_eq!(config.parallel.row_threshold, PARALLEL_THRESHOLD);

    let wide = wide_readings();
    let long = wide.melt(&config.melt_options(&["station"])).unwrap();
    assert_eq!(long.column_names(), &["station", "sensor", "reading"]);

    let back = long
        .pivot("station", "sensor", "reading", config.pivot.conflict)
        .unwrap();
    assert_eq!(back, wide);
}

#[test]
fn test_missing_config_file() {
    let file = TempTestFile::new("absent", "toml");
    assert!(matches!(
        ReshapeConfig::from_file(file.path()),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_malformed_config() {
    assert!(matches!(
        ReshapeConfig::from_toml_str("[parallel]\nrow_threshold = \"many\"\n"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        ReshapeConfig::from_toml_str("[csv]\ndelimiter = \"§\"\n"),
        Err(Error::Config(_))
    ));
}
