//! Wide -> long reshaping (melt / unpivot)

use std::collections::HashSet;

use log::debug;
use serde::Deserialize;

use super::core::DataFrame;
use crate::column::{Column, ColumnType, StringColumn};
use crate::error::{Error, Result};

/// How melt reconciles value columns of different types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCoercion {
    /// Equal types are kept, Int64 with Float64 widens to Float64, any other
    /// mix is rendered to String
    #[default]
    Widen,
    /// Any mix of types fails with `IncompatibleValueTypes`
    Strict,
}

/// Options for `DataFrame::melt`
#[derive(Debug, Clone)]
pub struct MeltOptions {
    /// Columns carried unchanged onto every output row
    pub id_vars: Vec<String>,
    /// Columns turned into (variable, value) pairs; `None` means every
    /// column not in `id_vars`
    pub value_vars: Option<Vec<String>>,
    /// Name of the output column holding source column names
    pub var_name: String,
    /// Name of the output column holding cell values
    pub value_name: String,
    pub coercion: ValueCoercion,
}

impl Default for MeltOptions {
    fn default() -> Self {
        Self {
            id_vars: Vec::new(),
            value_vars: None,
            var_name: "variable".to_string(),
            value_name: "value".to_string(),
            coercion: ValueCoercion::default(),
        }
    }
}

impl MeltOptions {
    pub fn new<S: AsRef<str>>(id_vars: &[S]) -> Self {
        Self {
            id_vars: id_vars.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn value_vars<S: AsRef<str>>(mut self, value_vars: &[S]) -> Self {
        self.value_vars = Some(value_vars.iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    pub fn coercion(mut self, coercion: ValueCoercion) -> Self {
        self.coercion = coercion;
        self
    }
}

/// Output type of the value column for the given source column types
pub fn common_value_type(types: &[ColumnType], coercion: ValueCoercion) -> Result<ColumnType> {
    let first = *types
        .first()
        .ok_or_else(|| Error::InvalidInput("no value columns to unpivot".to_string()))?;

    if types.iter().all(|&t| t == first) {
        return Ok(first);
    }

    match coercion {
        ValueCoercion::Strict => Err(Error::IncompatibleValueTypes(types.to_vec())),
        ValueCoercion::Widen => {
            let numeric = types
                .iter()
                .all(|t| matches!(t, ColumnType::Int64 | ColumnType::Float64));
            if numeric {
                Ok(ColumnType::Float64)
            } else {
                Ok(ColumnType::String)
            }
        }
    }
}

fn check_unique(names: &[String], role: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(Error::InvalidInput(format!(
                "column {} listed twice in {}",
                name, role
            )));
        }
    }
    Ok(())
}

impl DataFrame {
    /// Convert to long format
    ///
    /// The output has the `id_vars` columns, then `var_name` (String), then
    /// `value_name`. For each input row, in order, one output row is emitted
    /// per value column, value columns taken in schema order.
    ///
    /// # Example
    /// ```
    /// use partframe::{DataFrame, MeltOptions};
    ///
    /// // | id | A  | B  |
    /// // | 1  | 11 | 12 |
    /// // | 2  | 21 | 22 |
    /// let mut df = DataFrame::new();
    /// df.add_int_column("id", vec![1, 2]).unwrap();
    /// df.add_int_column("A", vec![11, 21]).unwrap();
    /// df.add_int_column("B", vec![12, 22]).unwrap();
    ///
    /// // | id | variable | value |
    /// // | 1  | A        | 11    |
    /// // | 1  | B        | 12    |
    /// // | 2  | A        | 21    |
    /// // | 2  | B        | 22    |
    /// let melted = df.melt(&MeltOptions::new(&["id"])).unwrap();
    /// assert_eq!(melted.row_count(), 4);
    /// ```
    pub fn melt(&self, options: &MeltOptions) -> Result<DataFrame> {
        for col in &options.id_vars {
            self.column_index(col)?;
        }
        check_unique(&options.id_vars, "id_vars")?;

        let value_vars: Vec<String> = match &options.value_vars {
            Some(value_vars) => {
                check_unique(value_vars, "value_vars")?;
                for col in value_vars {
                    self.column_index(col)?;
                    if options.id_vars.contains(col) {
                        return Err(Error::ColumnSetOverlap(col.clone()));
                    }
                }
                // Schema order, whatever order the caller listed them in
                self.column_names
                    .iter()
                    .filter(|name| value_vars.contains(*name))
                    .cloned()
                    .collect()
            }
            None => self
                .column_names
                .iter()
                .filter(|name| !options.id_vars.contains(*name))
                .cloned()
                .collect(),
        };

        let value_columns: Vec<&Column> = value_vars
            .iter()
            .map(|name| self.column(name))
            .collect::<Result<_>>()?;
        let types: Vec<ColumnType> = value_columns.iter().map(|c| c.column_type()).collect();
        let value_type = common_value_type(&types, options.coercion)?;

        let value_columns: Vec<Column> = value_columns
            .into_iter()
            .map(|c| c.cast(value_type))
            .collect::<Result<_>>()?;

        let n_rows = self.row_count;
        let n_value_vars = value_vars.len();
        let total_rows = n_rows * n_value_vars;

        // Each input row repeated once per value column
        let repeated: Vec<usize> = (0..n_rows)
            .flat_map(|i| std::iter::repeat(i).take(n_value_vars))
            .collect();

        let mut result = DataFrame::new();
        for id_var in &options.id_vars {
            result.add_column(id_var.clone(), self.column(id_var)?.take(&repeated)?)?;
        }

        let mut var_values = Vec::with_capacity(total_rows);
        let mut values = Vec::with_capacity(total_rows);
        for row_idx in 0..n_rows {
            for (name, column) in value_vars.iter().zip(&value_columns) {
                var_values.push(name.clone());
                values.push(column.get_value(row_idx)?);
            }
        }

        result.add_column(options.var_name.clone(), StringColumn::new(var_values))?;
        result.add_column(
            options.value_name.clone(),
            Column::from_values(value_type, values)?,
        )?;

        debug!(
            "melted {} rows x {} value columns into {} rows ({} values)",
            n_rows, n_value_vars, total_rows, value_type
        );

        Ok(result)
    }

    /// `melt` with default names (`variable`, `value`) and coercion
    ///
    /// `value_columns: None` unpivots every column not in `index_columns`.
    pub fn unpivot(&self, index_columns: &[&str], value_columns: Option<&[&str]>) -> Result<DataFrame> {
        let mut options = MeltOptions::new(index_columns);
        if let Some(value_columns) = value_columns {
            options = options.value_vars(value_columns);
        }
        self.melt(&options)
    }
}
