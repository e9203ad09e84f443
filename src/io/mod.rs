//! Loading frames from and writing frames to delimited text
pub mod csv;

pub use self::csv::{read_csv, read_csv_from_reader, write_csv, write_csv_to_writer, CsvReadOptions};
