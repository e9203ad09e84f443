//! Partitioning and reshaping of in-memory columnar tables
//!
//! A `DataFrame` holds equal-length typed columns. On top of it the crate
//! offers grouping by key columns (`group_by`, `partition_by`), key filtering,
//! order-preserving concatenation, and wide/long reshaping (`melt`, `pivot`).

pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod groupby;
pub mod io;
pub mod pivot;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use column::{BooleanColumn, Column, ColumnType, Float64Column, Int64Column, StringColumn};
pub use config::ReshapeConfig;
pub use dataframe::{concat, DataFrame, MeltOptions, ValueCoercion, PARALLEL_THRESHOLD};
pub use error::{Error, Result};
pub use groupby::{GroupBy, KeyTuple};
pub use io::CsvReadOptions;
pub use pivot::{ConflictPolicy, PivotTable};
pub use schema::{Field, Schema};
pub use value::Value;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
