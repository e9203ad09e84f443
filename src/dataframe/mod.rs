//! Column-oriented DataFrame and the row-set operations built on it
mod column_ops;
mod concat;
mod core;
mod parallel;
mod partition;
mod select;
mod transform;

pub use self::concat::concat;
pub use self::core::{DataFrame, DEFAULT_DISPLAY_ROWS};
pub use self::parallel::PARALLEL_THRESHOLD;
pub use self::transform::{common_value_type, MeltOptions, ValueCoercion};
