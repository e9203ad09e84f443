//! Column construction and lookup by name

use super::core::DataFrame;
use crate::column::{BooleanColumn, Column, ColumnType, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};
use crate::schema::{Field, Schema};
use crate::value::Value;

impl DataFrame {
    /// Build a frame from named columns, in order
    pub fn from_columns<S, I>(columns: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Column)>,
    {
        let mut df = Self::new();
        for (name, column) in columns {
            df.add_column(name, column)?;
        }
        Ok(df)
    }

    /// Append a column; names must be unique and lengths must agree
    pub fn add_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column_indices.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        let column_len = column.len();
        if !self.columns.is_empty() && column_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column_len,
            });
        }

        let column_idx = self.columns.len();
        self.columns.push(column);
        self.column_indices.insert(name.clone(), column_idx);
        self.column_names.push(name);

        if column_idx == 0 {
            self.row_count = column_len;
        }

        Ok(())
    }

    pub fn add_int_column(&mut self, name: impl Into<String>, data: Vec<i64>) -> Result<()> {
        self.add_column(name, Column::Int64(Int64Column::new(data)))
    }

    pub fn add_float_column(&mut self, name: impl Into<String>, data: Vec<f64>) -> Result<()> {
        self.add_column(name, Column::Float64(Float64Column::new(data)))
    }

    pub fn add_string_column(&mut self, name: impl Into<String>, data: Vec<String>) -> Result<()> {
        self.add_column(name, Column::String(StringColumn::new(data)))
    }

    pub fn add_boolean_column(&mut self, name: impl Into<String>, data: Vec<bool>) -> Result<()> {
        self.add_column(name, Column::Boolean(BooleanColumn::new(data)))
    }

    /// Position of `name` in the schema
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.column_indices
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        let idx = self.column_index(name)?;
        Ok(&self.columns[idx])
    }

    pub fn column_type(&self, name: &str) -> Result<ColumnType> {
        Ok(self.column(name)?.column_type())
    }

    /// Resolve several names at once, failing on the first unknown one
    pub(crate) fn resolve_columns(&self, names: &[&str]) -> Result<Vec<usize>> {
        names.iter().map(|name| self.column_index(name)).collect()
    }

    pub fn get_value(&self, row_idx: usize, column_name: &str) -> Result<Option<Value>> {
        self.column(column_name)?.get_value(row_idx)
    }

    /// All cells of one row, in schema order
    pub fn row(&self, row_idx: usize) -> Result<Vec<Option<Value>>> {
        if row_idx >= self.row_count {
            return Err(Error::IndexOutOfBounds {
                index: row_idx,
                size: self.row_count,
            });
        }
        self.columns.iter().map(|c| c.get_value(row_idx)).collect()
    }

    /// Every row, materialized
    pub fn rows(&self) -> Vec<Vec<Option<Value>>> {
        (0..self.row_count)
            .map(|i| {
                self.columns
                    .iter()
                    .map(|c| c.get_value(i).ok().flatten())
                    .collect()
            })
            .collect()
    }

    pub fn schema(&self) -> Schema {
        Schema::new(
            self.column_names
                .iter()
                .zip(&self.columns)
                .map(|(name, col)| Field::new(name.clone(), col.column_type()))
                .collect(),
        )
    }

    /// New frame with only `columns`, in the order given
    pub fn select_columns(&self, columns: &[&str]) -> Result<Self> {
        let mut result = Self::new();
        for &name in columns {
            result.add_column(name, self.column(name)?.clone())?;
        }
        Ok(result)
    }
}
