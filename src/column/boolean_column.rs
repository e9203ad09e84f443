use std::sync::Arc;

use crate::column::common::{utils, BitMask};
use crate::error::{Error, Result};

/// Boolean column, values packed into a `BitMask`
#[derive(Debug, Clone)]
pub struct BooleanColumn {
    pub(crate) data: BitMask,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl BooleanColumn {
    pub fn new(data: Vec<bool>) -> Self {
        Self {
            data: BitMask::from_bools(&data),
            null_mask: None,
        }
    }

    pub fn with_nulls(data: Vec<bool>, nulls: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), nulls.len(), "one null flag per value");
        Self {
            data: BitMask::from_bools(&data),
            null_mask: utils::create_null_mask(&nulls),
        }
    }

    pub fn from_options(values: Vec<Option<bool>>) -> Self {
        let nulls: Vec<bool> = values.iter().map(|v| v.is_none()).collect();
        let data: Vec<bool> = values.into_iter().map(|v| v.unwrap_or_default()).collect();
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

    pub fn get(&self, index: usize) -> Result<Option<bool>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        self.data.get(index).map(Some)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.data.len()).map(move |i| self.get(i).ok().flatten())
    }

    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        let mut values = Vec::with_capacity(indices.len());
        for &idx in indices {
            values.push(self.get(idx)?);
        }
        Ok(Self::from_options(values))
    }
}
