use thiserror::Error;

use crate::column::ColumnType;
use crate::schema::Schema;

/// Errors raised by frame construction, partitioning and reshaping
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("schema mismatch at frame {position}: expected {expected}, found {found}")]
    SchemaMismatch {
        position: usize,
        expected: Schema,
        found: Schema,
    },

    #[error("column {0} appears in both the index and value column sets")]
    ColumnSetOverlap(String),

    #[error("value columns have incompatible types: {0:?}")]
    IncompatibleValueTypes(Vec<ColumnType>),

    #[error("type mismatch at position {position}: expected {expected}, found {found}")]
    TypeMismatch {
        position: usize,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("inconsistent row count: expected {expected}, found {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("duplicate entry for index {index} and variable {variable}")]
    DuplicateEntry { index: String, variable: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
