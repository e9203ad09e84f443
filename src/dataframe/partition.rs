//! Per-key row filtering and the extract -> filter -> concat pipeline

use log::debug;

use super::concat::concat;
use super::core::DataFrame;
use crate::error::{Error, Result};
use crate::groupby::KeyTuple;

impl DataFrame {
    /// Rows whose `key_columns` equal `key`, in original order
    ///
    /// All columns are kept. Null key elements match null cells only.
    pub fn filter_by_key(&self, key_columns: &[&str], key: &KeyTuple) -> Result<Self> {
        if key.len() != key_columns.len() {
            return Err(Error::LengthMismatch {
                expected: key_columns.len(),
                actual: key.len(),
            });
        }

        let column_idx = self.resolve_columns(key_columns)?;

        let mut indices = Vec::new();
        'rows: for row_idx in 0..self.row_count {
            for (&idx, expected) in column_idx.iter().zip(key.values()) {
                if !self.columns[idx].value_equals(row_idx, expected)? {
                    continue 'rows;
                }
            }
            indices.push(row_idx);
        }

        debug!("key {} matched {} of {} rows", key, indices.len(), self.row_count);

        self.select_rows_by_indices(&indices)
    }

    /// One sub-frame per distinct key, in first-occurrence key order
    pub fn partition_by(&self, key_columns: &[&str]) -> Result<Vec<(KeyTuple, Self)>> {
        let keys = self.group_keys(key_columns)?;
        keys.into_iter()
            .map(|key| {
                let part = self.filter_by_key(key_columns, &key)?;
                Ok((key, part))
            })
            .collect()
    }

    /// Reassemble the frame with rows grouped by key
    ///
    /// Groups appear in first-occurrence order of their key; inside a group
    /// rows keep their original order. The result holds exactly the rows of
    /// `self`.
    pub fn regroup(&self, key_columns: &[&str]) -> Result<Self> {
        let parts = self.partition_by(key_columns)?;
        if parts.is_empty() {
            return self.select_rows_by_indices(&[]);
        }
        concat(parts.iter().map(|(_, part)| part))
    }
}
