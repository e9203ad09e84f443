//! Test utilities for temporary files and fixture frames

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use partframe::{DataFrame, Float64Column};
use tempfile::TempDir;

/// RAII wrapper for a temporary test file
///
/// The file lives in its own temporary directory, removed on drop.
pub struct TempTestFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempTestFile {
    pub fn new(test_name: &str, extension: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("partframe_test_{}_", test_name))
            .tempdir()
            .expect("Failed to create temp dir");
        let path = dir.path().join(format!("{}.{}", test_name, extension));
        TempTestFile { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Helper to create a test CSV file with given data
pub fn create_test_csv(test_name: &str, headers: &[&str], rows: &[&[&str]]) -> TempTestFile {
    let temp_file = TempTestFile::new(test_name, "csv");
    let mut file = File::create(temp_file.path()).expect("Failed to create test CSV");

    writeln!(file, "{}", headers.join(",")).expect("Failed to write headers");
    for row in rows {
        writeln!(file, "{}", row.join(",")).expect("Failed to write row");
    }

    temp_file
}

/// First rows of mtcars, key columns interleaved
///
/// | model          | cyl | gear | hp  | mpg  |
/// | Mazda RX4      | 6   | 4    | 110 | 21.0 |
/// | Datsun 710     | 4   | 4    | 93  | 22.8 |
/// | Hornet 4 Drive | 6   | 3    | 110 | 21.4 |
/// | Valiant        | 6   | 3    | 105 | 18.1 |
/// | Merc 240D      | 4   | 4    | 62  | 24.4 |
/// | Mazda RX4 Wag  | 6   | 4    | 110 | 21.0 |
pub fn mtcars_sample() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_string_column(
        "model",
        [
            "Mazda RX4",
            "Datsun 710",
            "Hornet 4 Drive",
            "Valiant",
            "Merc 240D",
            "Mazda RX4 Wag",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
    .unwrap();
    df.add_int_column("cyl", vec![6, 4, 6, 6, 4, 6]).unwrap();
    df.add_int_column("gear", vec![4, 4, 3, 3, 4, 4]).unwrap();
    df.add_int_column("hp", vec![110, 93, 110, 105, 62, 110])
        .unwrap();
    df.add_float_column("mpg", vec![21.0, 22.8, 21.4, 18.1, 24.4, 21.0])
        .unwrap();
    df
}

/// Wide sensor readings with a null
///
/// | station | t1  | t2   |
/// | a       | 1.5 | 2.5  |
/// | b       | 3.0 | null |
/// | c       | 4.0 | 5.0  |
pub fn wide_readings() -> DataFrame {
    let mut df = DataFrame::new();
    df.add_string_column("station", vec!["a".into(), "b".into(), "c".into()])
        .unwrap();
    df.add_float_column("t1", vec![1.5, 3.0, 4.0]).unwrap();
    df.add_column(
        "t2",
        Float64Column::from_options(vec![Some(2.5), None, Some(5.0)]),
    )
    .unwrap();
    df
}
