use std::sync::Arc;

use crate::column::common::utils;
use crate::error::{Error, Result};

/// Int64 column
#[derive(Debug, Clone)]
pub struct Int64Column {
    pub(crate) data: Arc<[i64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl Int64Column {
    pub fn new(data: Vec<i64>) -> Self {
        Self {
            data: data.into(),
            null_mask: None,
        }
    }

    /// Column with nulls; `nulls[i]` marks row `i` as missing
    pub fn with_nulls(data: Vec<i64>, nulls: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), nulls.len(), "one null flag per value");
        Self {
            data: data.into(),
            null_mask: utils::create_null_mask(&nulls),
        }
    }

    pub fn from_options(values: Vec<Option<i64>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(|v| v.is_none()).collect();
        let data = values.into_iter().map(|v| v.unwrap_or_default()).collect();
        Self::with_nulls(data, nulls)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_null(&self, index: usize) -> bool {
        match &self.null_mask {
            Some(mask) => utils::bit_is_set(mask, index),
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Result<Option<i64>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        Ok(Some(self.data[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        (0..self.data.len()).map(move |i| {
            if self.is_null(i) {
                None
            } else {
                Some(self.data[i])
            }
        })
    }

    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        let mut values = Vec::with_capacity(indices.len());
        for &idx in indices {
            values.push(self.get(idx)?);
        }
        Ok(Self::from_options(values))
    }
}
