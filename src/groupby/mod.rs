//! Distinct key tuples and row groups over a set of key columns

use std::collections::HashMap;
use std::fmt::{self, Display};

use log::{debug, trace};

use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::value::{display_cell, Value};

/// Values of the key columns for one group, in key-column order
///
/// A `None` element is a null key value; it equals only another null.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyTuple(Vec<Option<Value>>);

impl KeyTuple {
    pub fn new(values: Vec<Option<Value>>) -> Self {
        KeyTuple(values)
    }

    pub fn values(&self) -> &[Option<Value>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Option<Value>>> for KeyTuple {
    fn from(values: Vec<Option<Value>>) -> Self {
        KeyTuple(values)
    }
}

impl From<Vec<Value>> for KeyTuple {
    fn from(values: Vec<Value>) -> Self {
        KeyTuple(values.into_iter().map(Some).collect())
    }
}

impl Display for KeyTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", display_cell(value))?;
        }
        write!(f, ")")
    }
}

/// Rows of a frame grouped by key tuple
///
/// Groups are kept in first-occurrence order of their key, and rows inside a
/// group keep their original order.
#[derive(Debug)]
pub struct GroupBy<'a> {
    df: &'a DataFrame,
    key_columns: Vec<String>,
    keys: Vec<KeyTuple>,
    groups: Vec<Vec<usize>>,
    positions: HashMap<KeyTuple, usize>,
}

impl<'a> GroupBy<'a> {
    pub(crate) fn new(df: &'a DataFrame, key_columns: &[&str]) -> Result<Self> {
        let column_idx = df.resolve_columns(key_columns)?;

        let mut keys = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut positions: HashMap<KeyTuple, usize> = HashMap::new();

        for row_idx in 0..df.row_count() {
            let mut key = Vec::with_capacity(column_idx.len());
            for &idx in &column_idx {
                key.push(df.columns[idx].get_value(row_idx)?);
            }
            let key = KeyTuple(key);

            match positions.get(&key) {
                Some(&pos) => groups[pos].push(row_idx),
                None => {
                    positions.insert(key.clone(), keys.len());
                    keys.push(key);
                    groups.push(vec![row_idx]);
                }
            }
        }

        debug!(
            "grouped {} rows by {:?} into {} groups",
            df.row_count(),
            key_columns,
            keys.len()
        );

        Ok(GroupBy {
            df,
            key_columns: key_columns.iter().map(|s| s.to_string()).collect(),
            keys,
            groups,
            positions,
        })
    }

    pub fn ngroups(&self) -> usize {
        self.keys.len()
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    /// Distinct key tuples, first-occurrence order
    pub fn keys(&self) -> &[KeyTuple] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<KeyTuple> {
        self.keys
    }

    /// Group sizes, aligned with `keys()`
    pub fn sizes(&self) -> Vec<usize> {
        self.groups.iter().map(|g| g.len()).collect()
    }

    /// Row positions belonging to `key`
    pub fn indices(&self, key: &KeyTuple) -> Option<&[usize]> {
        self.positions
            .get(key)
            .map(|&pos| self.groups[pos].as_slice())
    }

    /// Rows of one group; an absent key yields an empty frame with the full schema
    pub fn get_group(&self, key: &KeyTuple) -> Result<DataFrame> {
        let indices = self.indices(key).unwrap_or(&[]);
        self.df.select_rows_by_indices(indices)
    }

    /// Every group paired with its key, in key order
    pub fn partitions(&self) -> Result<Vec<(KeyTuple, DataFrame)>> {
        self.keys
            .iter()
            .zip(&self.groups)
            .map(|(key, indices)| {
                trace!("group {} has {} rows", key, indices.len());
                Ok((key.clone(), self.df.select_rows_by_indices(indices)?))
            })
            .collect()
    }
}

impl DataFrame {
    /// Group rows by the values of `key_columns`
    pub fn group_by(&self, key_columns: &[&str]) -> Result<GroupBy<'_>> {
        GroupBy::new(self, key_columns)
    }

    /// Distinct combinations of `key_columns`, first-occurrence order
    pub fn group_keys(&self, key_columns: &[&str]) -> Result<Vec<KeyTuple>> {
        Ok(self.group_by(key_columns)?.into_keys())
    }
}
