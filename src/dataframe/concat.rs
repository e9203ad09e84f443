//! Row-wise concatenation of schema-compatible frames

use log::debug;

use super::core::DataFrame;
use crate::column::Column;
use crate::error::{Error, Result};

/// Stack frames vertically, keeping input order
///
/// Every frame must have exactly the schema of the first one (same names,
/// same types, same order). Values are copied without coercion.
///
/// # Example
/// ```
/// use partframe::{concat, DataFrame};
///
/// let mut a = DataFrame::new();
/// a.add_int_column("x", vec![1, 2]).unwrap();
/// let mut b = DataFrame::new();
/// b.add_int_column("x", vec![3]).unwrap();
///
/// let joined = concat([&a, &b]).unwrap();
/// assert_eq!(joined.row_count(), 3);
/// ```
pub fn concat<'a, I>(frames: I) -> Result<DataFrame>
where
    I: IntoIterator<Item = &'a DataFrame>,
{
    let frames: Vec<&DataFrame> = frames.into_iter().collect();
    let first = frames
        .first()
        .ok_or_else(|| Error::EmptyInput("no frames to concatenate".to_string()))?;

    let expected = first.schema();
    for (position, df) in frames.iter().enumerate().skip(1) {
        let found = df.schema();
        if found != expected {
            return Err(Error::SchemaMismatch {
                position,
                expected,
                found,
            });
        }
    }

    let mut result = DataFrame::new();
    for (col_idx, name) in first.column_names.iter().enumerate() {
        let parts: Vec<&Column> = frames.iter().map(|df| &df.columns[col_idx]).collect();
        result.add_column(name.clone(), Column::concat(&parts)?)?;
    }

    debug!(
        "concatenated {} frames into {} rows",
        frames.len(),
        result.row_count()
    );

    Ok(result)
}

impl DataFrame {
    /// `self` followed by `other`
    pub fn append(&self, other: &DataFrame) -> Result<DataFrame> {
        concat([self, other])
    }
}
