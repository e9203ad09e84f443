//! DataFrame core: storage layout and text rendering

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::column::Column;

/// Rows shown by `Display` before the table is cut short
pub const DEFAULT_DISPLAY_ROWS: usize = 10;

/// Column-oriented table of equal-length, uniquely named columns
///
/// Every operation returns a new frame; inputs are never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    // Column data, in schema order
    pub(crate) columns: Vec<Column>,
    // Column name -> position
    pub(crate) column_indices: HashMap<String, usize>,
    pub(crate) column_names: Vec<String>,
    pub(crate) row_count: usize,
}

impl DataFrame {
    /// Empty frame with no columns
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_indices.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Render at most `max_rows` rows as a text table
    pub fn to_table_string(&self, max_rows: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_table(&mut out, max_rows);
        out
    }

    fn write_table<W: fmt::Write>(&self, f: &mut W, max_rows: usize) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "DataFrame (0 rows x 0 columns)");
        }

        writeln!(
            f,
            "DataFrame ({} rows x {} columns):",
            self.row_count,
            self.columns.len()
        )?;

        write!(f, "{:<5} |", "idx")?;
        for name in &self.column_names {
            write!(f, " {:<15} |", name)?;
        }
        writeln!(f)?;

        write!(f, "{:-<5}-+", "")?;
        for _ in &self.column_names {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        let display_rows = std::cmp::min(self.row_count, max_rows);
        for i in 0..display_rows {
            write!(f, "{:<5} |", i)?;
            for col in &self.columns {
                let value = match col {
                    Column::Int64(col) => match col.get(i) {
                        Ok(Some(val)) => format!("{}", val),
                        _ => "NULL".to_string(),
                    },
                    Column::Float64(col) => match col.get(i) {
                        Ok(Some(val)) => format!("{:.3}", val),
                        _ => "NULL".to_string(),
                    },
                    Column::String(col) => match col.get(i) {
                        Ok(Some(val)) => format!("\"{}\"", val),
                        _ => "NULL".to_string(),
                    },
                    Column::Boolean(col) => match col.get(i) {
                        Ok(Some(val)) => format!("{}", val),
                        _ => "NULL".to_string(),
                    },
                };
                write!(f, " {:<15} |", value)?;
            }
            writeln!(f)?;
        }

        if self.row_count > max_rows {
            writeln!(f, "... ({} more rows)", self.row_count - max_rows)?;
        }

        Ok(())
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, DEFAULT_DISPLAY_ROWS)
    }
}

/// Schema and every cell must match; row order is significant
impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.row_count == other.row_count
            && self.column_names == other.column_names
            && self.columns == other.columns
    }
}
