//! Row selection

use super::core::DataFrame;
use crate::error::{Error, Result};

impl DataFrame {
    /// Gather rows by position, in the order given
    ///
    /// The result has the full schema of `self`, even when `indices` is empty.
    pub fn select_rows_by_indices(&self, indices: &[usize]) -> Result<Self> {
        let mut result = Self::new();

        for (name, column) in self.column_names.iter().zip(&self.columns) {
            result.add_column(name.clone(), column.take(indices)?)?;
        }

        Ok(result)
    }

    /// Rows whose mask entry is `true`
    pub fn select_by_mask(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.row_count {
            return Err(Error::LengthMismatch {
                expected: self.row_count,
                actual: mask.len(),
            });
        }

        let indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| if keep { Some(i) } else { None })
            .collect();

        self.select_rows_by_indices(&indices)
    }
}
