//! Long -> wide reshaping

use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;

use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::value::{display_cell, Value};

/// Which source row fills a cell that several rows map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Earliest row wins
    #[default]
    First,
    /// Latest row wins
    Last,
    /// Report `DuplicateEntry`
    Fail,
}

impl ConflictPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ConflictPolicy::First => "first",
            ConflictPolicy::Last => "last",
            ConflictPolicy::Fail => "fail",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" => Some(ConflictPolicy::First),
            "last" => Some(ConflictPolicy::Last),
            "fail" | "error" => Some(ConflictPolicy::Fail),
            _ => None,
        }
    }
}

/// Distinct values of one column in first-occurrence order
struct FirstSeen {
    positions: HashMap<Option<Value>, usize>,
    // Row where each distinct value first appeared
    first_rows: Vec<usize>,
    values: Vec<Option<Value>>,
}

impl FirstSeen {
    fn scan(column: &Column) -> Result<(Self, Vec<usize>)> {
        let mut seen = FirstSeen {
            positions: HashMap::new(),
            first_rows: Vec::new(),
            values: Vec::new(),
        };
        let mut slot_of_row = Vec::with_capacity(column.len());

        for row_idx in 0..column.len() {
            let value = column.get_value(row_idx)?;
            let slot = match seen.positions.get(&value) {
                Some(&slot) => slot,
                None => {
                    let slot = seen.values.len();
                    seen.positions.insert(value.clone(), slot);
                    seen.first_rows.push(row_idx);
                    seen.values.push(value);
                    slot
                }
            };
            slot_of_row.push(slot);
        }

        Ok((seen, slot_of_row))
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

/// Pivot of a long-format frame
///
/// The output has the index column (one row per distinct index value, in
/// first-occurrence order) followed by one column per distinct value of the
/// variable column (in first-occurrence order), filled from the value column.
#[derive(Debug)]
pub struct PivotTable<'a> {
    df: &'a DataFrame,
    index: String,
    columns: String,
    values: String,
    conflict: ConflictPolicy,
}

impl<'a> PivotTable<'a> {
    /// Check that the three columns exist
    pub fn new(
        df: &'a DataFrame,
        index: impl Into<String>,
        columns: impl Into<String>,
        values: impl Into<String>,
    ) -> Result<Self> {
        let index = index.into();
        let columns = columns.into();
        let values = values.into();

        for name in [&index, &columns, &values] {
            df.column_index(name)?;
        }

        Ok(PivotTable {
            df,
            index,
            columns,
            values,
            conflict: ConflictPolicy::default(),
        })
    }

    pub fn conflict(mut self, policy: ConflictPolicy) -> Self {
        self.conflict = policy;
        self
    }

    pub fn execute(&self) -> Result<DataFrame> {
        let index_col = self.df.column(&self.index)?;
        let variable_col = self.df.column(&self.columns)?;
        let value_col = self.df.column(&self.values)?;

        let (index_values, index_slots) = FirstSeen::scan(index_col)?;
        let (variables, variable_slots) = FirstSeen::scan(variable_col)?;

        // cells[variable][index] = source row
        let mut cells: Vec<Vec<Option<usize>>> = vec![vec![None; index_values.len()]; variables.len()];
        let mut conflicts = 0usize;

        for row_idx in 0..self.df.row_count() {
            let cell = &mut cells[variable_slots[row_idx]][index_slots[row_idx]];
            match (*cell, self.conflict) {
                (None, _) => *cell = Some(row_idx),
                (Some(_), ConflictPolicy::First) => conflicts += 1,
                (Some(_), ConflictPolicy::Last) => {
                    conflicts += 1;
                    *cell = Some(row_idx);
                }
                (Some(_), ConflictPolicy::Fail) => {
                    return Err(Error::DuplicateEntry {
                        index: display_cell(&index_values.values[index_slots[row_idx]]),
                        variable: display_cell(&variables.values[variable_slots[row_idx]]),
                    });
                }
            }
        }

        if conflicts > 0 {
            warn!(
                "pivot resolved {} duplicate ({}, {}) entries with policy {}",
                conflicts,
                self.index,
                self.columns,
                self.conflict.name()
            );
        }

        let mut result = DataFrame::new();
        result.add_column(self.index.clone(), index_col.take(&index_values.first_rows)?)?;

        let value_type = value_col.column_type();
        for (variable, rows) in variables.values.iter().zip(&cells) {
            let mut column_values = Vec::with_capacity(rows.len());
            for row in rows {
                column_values.push(match row {
                    Some(row_idx) => value_col.get_value(*row_idx)?,
                    None => None,
                });
            }
            result.add_column(display_cell(variable), Column::from_values(value_type, column_values)?)?;
        }

        debug!(
            "pivoted {} rows into {} rows x {} variable columns",
            self.df.row_count(),
            index_values.len(),
            variables.len()
        );

        Ok(result)
    }
}

impl DataFrame {
    /// Long -> wide; see `PivotTable`
    ///
    /// # Example
    /// ```
    /// use partframe::{ConflictPolicy, DataFrame};
    ///
    /// let mut long = DataFrame::new();
    /// long.add_int_column("id", vec![1, 1, 2]).unwrap();
    /// long.add_string_column("variable", vec!["a".into(), "b".into(), "a".into()]).unwrap();
    /// long.add_int_column("value", vec![10, 20, 30]).unwrap();
    ///
    /// let wide = long.pivot("id", "variable", "value", ConflictPolicy::First).unwrap();
    /// assert_eq!(wide.column_names(), &["id", "a", "b"]);
    /// assert_eq!(wide.row_count(), 2);
    /// ```
    pub fn pivot(
        &self,
        index: &str,
        columns: &str,
        values: &str,
        conflict: ConflictPolicy,
    ) -> Result<DataFrame> {
        PivotTable::new(self, index, columns, values)?
            .conflict(conflict)
            .execute()
    }
}
