//! Parallel partitioning

use log::debug;
use rayon::prelude::*;

use super::concat::concat;
use super::core::DataFrame;
use crate::error::Result;
use crate::groupby::KeyTuple;

/// Below this many rows partitioning stays on the calling thread
pub const PARALLEL_THRESHOLD: usize = 50_000;

impl DataFrame {
    /// `partition_by` with one rayon task per key
    ///
    /// Each task reads the shared frame and writes the slot of its key, so the
    /// output order is the key order regardless of which task finishes first.
    pub fn par_partition_by(&self, key_columns: &[&str]) -> Result<Vec<(KeyTuple, Self)>> {
        self.par_partition_by_with_threshold(key_columns, PARALLEL_THRESHOLD)
    }

    pub fn par_partition_by_with_threshold(
        &self,
        key_columns: &[&str],
        row_threshold: usize,
    ) -> Result<Vec<(KeyTuple, Self)>> {
        if self.row_count < row_threshold {
            return self.partition_by(key_columns);
        }

        let keys = self.group_keys(key_columns)?;
        debug!(
            "partitioning {} rows into {} groups on {} threads",
            self.row_count,
            keys.len(),
            rayon::current_num_threads()
        );

        keys.into_par_iter()
            .map(|key| {
                let part = self.filter_by_key(key_columns, &key)?;
                Ok((key, part))
            })
            .collect()
    }

    /// `regroup` built on `par_partition_by_with_threshold`
    pub fn par_regroup(&self, key_columns: &[&str], row_threshold: usize) -> Result<Self> {
        let parts = self.par_partition_by_with_threshold(key_columns, row_threshold)?;
        if parts.is_empty() {
            return self.select_rows_by_indices(&[]);
        }
        concat(parts.iter().map(|(_, part)| part))
    }
}
