use std::fmt::{self, Display};
use std::sync::Arc;

use crate::column::{BooleanColumn, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};
use crate::value::Value;

/// Identifies the scalar type stored in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
    Boolean,
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int64 => "i64",
            ColumnType::Float64 => "f64",
            ColumnType::String => "str",
            ColumnType::Boolean => "bool",
        };
        write!(f, "{}", name)
    }
}

/// A typed, fixed-length sequence of nullable scalars
#[derive(Debug, Clone)]
pub enum Column {
    Int64(Int64Column),
    Float64(Float64Column),
    String(StringColumn),
    Boolean(BooleanColumn),
}

/// Packed bit vector, used for boolean data
#[derive(Debug, Clone)]
pub struct BitMask {
    pub(crate) data: Arc<[u8]>,
    pub(crate) len: usize,
}

impl BitMask {
    pub fn from_bools(bools: &[bool]) -> Self {
        Self {
            data: utils::pack_bits(bools),
            len: bools.len(),
        }
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        Ok(utils::bit_is_set(&self.data, index))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Bit packing helpers shared by the typed columns
pub mod utils {
    use std::sync::Arc;

    /// Pack booleans into a little-endian bit vector
    pub fn pack_bits(bits: &[bool]) -> Arc<[u8]> {
        let bytes_needed = (bits.len() + 7) / 8;
        let mut data = vec![0u8; bytes_needed];

        for (i, &is_set) in bits.iter().enumerate() {
            if is_set {
                data[i / 8] |= 1 << (i % 8);
            }
        }

        data.into()
    }

    /// Null mask for the given null flags, `None` when nothing is null
    pub fn create_null_mask(nulls: &[bool]) -> Option<Arc<[u8]>> {
        if nulls.iter().any(|&is_null| is_null) {
            Some(pack_bits(nulls))
        } else {
            None
        }
    }

    pub fn bit_is_set(mask: &[u8], index: usize) -> bool {
        let byte_idx = index / 8;
        byte_idx < mask.len() && (mask[byte_idx] & (1 << (index % 8))) != 0
    }
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Int64(col) => col.len(),
            Column::Float64(col) => col.len(),
            Column::String(col) => col.len(),
            Column::Boolean(col) => col.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Int64(_) => ColumnType::Int64,
            Column::Float64(_) => ColumnType::Float64,
            Column::String(_) => ColumnType::String,
            Column::Boolean(_) => ColumnType::Boolean,
        }
    }

    /// Cell at `index`, `None` for null
    pub fn get_value(&self, index: usize) -> Result<Option<Value>> {
        Ok(match self {
            Column::Int64(col) => col.get(index)?.map(Value::Int64),
            Column::Float64(col) => col.get(index)?.map(Value::Float64),
            Column::String(col) => col.get(index)?.map(|s| Value::String(s.to_string())),
            Column::Boolean(col) => col.get(index)?.map(Value::Boolean),
        })
    }

    pub fn is_null(&self, index: usize) -> bool {
        match self {
            Column::Int64(col) => col.is_null(index),
            Column::Float64(col) => col.is_null(index),
            Column::String(col) => col.is_null(index),
            Column::Boolean(col) => col.is_null(index),
        }
    }

    /// Does the cell at `index` equal `expected` (null equals null)?
    pub fn value_equals(&self, index: usize, expected: &Option<Value>) -> Result<bool> {
        let equal = match (self, expected) {
            (_, None) => self.get_value(index)?.is_none(),
            (Column::Int64(col), Some(Value::Int64(v))) => col.get(index)? == Some(*v),
            (Column::String(col), Some(Value::String(v))) => col.get(index)? == Some(v.as_str()),
            (Column::Boolean(col), Some(Value::Boolean(v))) => col.get(index)? == Some(*v),
            (Column::Float64(_), Some(v @ Value::Float64(_))) => {
                self.get_value(index)?.as_ref() == Some(v)
            }
            _ => false,
        };
        Ok(equal)
    }

    /// All cells in order
    pub fn to_values(&self) -> Vec<Option<Value>> {
        (0..self.len())
            .map(|i| self.get_value(i).ok().flatten())
            .collect()
    }

    /// Gather the rows at `indices`, keeping nulls
    pub fn take(&self, indices: &[usize]) -> Result<Column> {
        Ok(match self {
            Column::Int64(col) => Column::Int64(col.take(indices)?),
            Column::Float64(col) => Column::Float64(col.take(indices)?),
            Column::String(col) => Column::String(col.take(indices)?),
            Column::Boolean(col) => Column::Boolean(col.take(indices)?),
        })
    }

    /// Concatenate columns of one type end to end
    pub fn concat(columns: &[&Column]) -> Result<Column> {
        let first = columns
            .first()
            .ok_or_else(|| Error::EmptyInput("no columns to concatenate".to_string()))?;
        let expected = first.column_type();

        let mut values = Vec::with_capacity(columns.iter().map(|c| c.len()).sum());
        for (position, column) in columns.iter().enumerate() {
            if column.column_type() != expected {
                return Err(Error::TypeMismatch {
                    position,
                    expected,
                    found: column.column_type(),
                });
            }
            values.extend(column.to_values());
        }

        Column::from_values(expected, values)
    }

    /// Build a column of `column_type`; every non-null value must match it
    pub fn from_values(column_type: ColumnType, values: Vec<Option<Value>>) -> Result<Column> {
        fn check(position: usize, expected: ColumnType, value: &Value) -> Error {
            Error::TypeMismatch {
                position,
                expected,
                found: value.column_type(),
            }
        }

        let column = match column_type {
            ColumnType::Int64 => {
                let mut data = Vec::with_capacity(values.len());
                for (i, value) in values.into_iter().enumerate() {
                    match value {
                        None => data.push(None),
                        Some(Value::Int64(v)) => data.push(Some(v)),
                        Some(other) => return Err(check(i, column_type, &other)),
                    }
                }
                Column::Int64(Int64Column::from_options(data))
            }
            ColumnType::Float64 => {
                let mut data = Vec::with_capacity(values.len());
                for (i, value) in values.into_iter().enumerate() {
                    match value {
                        None => data.push(None),
                        Some(Value::Float64(v)) => data.push(Some(v)),
                        Some(other) => return Err(check(i, column_type, &other)),
                    }
                }
                Column::Float64(Float64Column::from_options(data))
            }
            ColumnType::String => {
                let mut data = Vec::with_capacity(values.len());
                for (i, value) in values.into_iter().enumerate() {
                    match value {
                        None => data.push(None),
                        Some(Value::String(v)) => data.push(Some(v)),
                        Some(other) => return Err(check(i, column_type, &other)),
                    }
                }
                Column::String(StringColumn::from_options(data))
            }
            ColumnType::Boolean => {
                let mut data = Vec::with_capacity(values.len());
                for (i, value) in values.into_iter().enumerate() {
                    match value {
                        None => data.push(None),
                        Some(Value::Boolean(v)) => data.push(Some(v)),
                        Some(other) => return Err(check(i, column_type, &other)),
                    }
                }
                Column::Boolean(BooleanColumn::from_options(data))
            }
        };

        Ok(column)
    }

    /// Convert to `target`.
    ///
    /// Only identity, Int64 -> Float64 and anything -> String are supported.
    pub fn cast(&self, target: ColumnType) -> Result<Column> {
        let source = self.column_type();
        if source == target {
            return Ok(self.clone());
        }

        match (self, target) {
            (Column::Int64(col), ColumnType::Float64) => {
                let data = col.iter().map(|v| v.map(|v| v as f64)).collect();
                Ok(Column::Float64(Float64Column::from_options(data)))
            }
            (_, ColumnType::String) => {
                let data = self
                    .to_values()
                    .into_iter()
                    .map(|v| v.map(|v| v.to_string()))
                    .collect();
                Ok(Column::String(StringColumn::from_options(data)))
            }
            _ => Err(Error::TypeMismatch {
                position: 0,
                expected: target,
                found: source,
            }),
        }
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.column_type() == other.column_type()
            && self.len() == other.len()
            && (0..self.len()).all(|i| {
                matches!(
                    (self.get_value(i), other.get_value(i)),
                    (Ok(a), Ok(b)) if a == b
                )
            })
    }
}

impl From<Int64Column> for Column {
    fn from(col: Int64Column) -> Self {
        Column::Int64(col)
    }
}

impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}

impl From<BooleanColumn> for Column {
    fn from(col: BooleanColumn) -> Self {
        Column::Boolean(col)
    }
}
