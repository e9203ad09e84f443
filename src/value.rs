//! Scalar cell values
//!
//! A cell in a column is an `Option<Value>`; `None` is null. `Value` is
//! hashable so that tuples of cells can serve as grouping keys.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use crate::column::ColumnType;

/// A single non-null scalar
#[derive(Debug, Clone)]
pub enum Value {
    Int64(i64),
    Float64(f64),
    String(String),
    Boolean(bool),
}

impl Value {
    /// Type of the column this value belongs in
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int64(_) => ColumnType::Int64,
            Value::Float64(_) => ColumnType::Float64,
            Value::String(_) => ColumnType::String,
            Value::Boolean(_) => ColumnType::Boolean,
        }
    }
}

/// Bit pattern used for float equality and hashing.
///
/// `-0.0` folds onto `0.0` and every NaN folds onto one NaN, so floats behave
/// as group keys.
fn canonical_f64_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => {
                canonical_f64_bits(*a) == canonical_f64_bits(*b)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Int64(v) => v.hash(state),
            Value::Float64(v) => canonical_f64_bits(*v).hash(state),
            Value::String(v) => v.hash(state),
            Value::Boolean(v) => v.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// Render a nullable cell, `null` for missing values
pub fn display_cell(cell: &Option<Value>) -> String {
    match cell {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
