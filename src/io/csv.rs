use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use serde::Deserialize;

use crate::column::{BooleanColumn, Column, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};
use crate::DataFrame;

/// Options for loading delimited text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CsvReadOptions {
    /// First record holds column names; otherwise columns are `column_0`, ...
    pub has_header: bool,
    pub delimiter: char,
    /// Field values read as null, in addition to the empty field
    pub null_values: Vec<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: ',',
            null_values: vec!["NA".to_string(), "null".to_string()],
        }
    }
}

impl CsvReadOptions {
    fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::InvalidInput(format!(
                "delimiter must be ASCII, got {:?}",
                self.delimiter
            )))
        }
    }

    fn is_null(&self, field: &str) -> bool {
        field.is_empty() || self.null_values.iter().any(|n| n == field)
    }
}

/// Load a CSV file, inferring a type per column
pub fn read_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    debug!("reading CSV from {}", path.as_ref().display());
    read_csv_from_reader(file, options)
}

/// Load CSV from any reader
///
/// Each column is typed as the first of Int64, Float64, Boolean (`true` /
/// `false`) that parses every non-null field, falling back to String. With a
/// header, records longer than the header are rejected; shorter ones are
/// padded with nulls.
pub fn read_csv_from_reader<R: Read>(reader: R, options: &CsvReadOptions) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter_byte()?)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut headers: Vec<String> = if options.has_header {
        rdr.headers()?.iter().map(|h| h.to_string()).collect()
    } else {
        Vec::new()
    };

    // Fields per column; `None` is null
    let mut buffers: Vec<Vec<Option<String>>> = headers.iter().map(|_| Vec::new()).collect();
    let mut n_rows = 0usize;

    for result in rdr.records() {
        let record = result?;

        if options.has_header {
            // Short records pad with nulls; long ones would lose fields
            if record.len() > headers.len() {
                return Err(Error::InvalidInput(format!(
                    "record {} has {} fields but the header has {}",
                    n_rows + 1,
                    record.len(),
                    headers.len()
                )));
            }
        } else {
            // Headerless input: the widest record decides the column count
            while headers.len() < record.len() {
                headers.push(format!("column_{}", headers.len()));
                buffers.push(vec![None; n_rows]);
            }
        }

        for (i, buffer) in buffers.iter_mut().enumerate() {
            let field = record.get(i).filter(|f| !options.is_null(f));
            buffer.push(field.map(|f| f.to_string()));
        }
        n_rows += 1;
    }

    let mut df = DataFrame::new();
    for (header, values) in headers.into_iter().zip(buffers) {
        let column = infer_column(values);
        debug!("column {} inferred as {}", header, column.column_type());
        df.add_column(header, column)?;
    }

    Ok(df)
}

// Only the spellings `write_csv` produces
fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn infer_column(values: Vec<Option<String>>) -> Column {
    let non_null = || values.iter().flatten();

    if non_null().next().is_none() {
        return Column::String(StringColumn::from_options(values));
    }

    if non_null().all(|s| s.parse::<i64>().is_ok()) {
        let data = values
            .iter()
            .map(|v| v.as_ref().and_then(|s| s.parse::<i64>().ok()))
            .collect();
        return Column::Int64(Int64Column::from_options(data));
    }

    if non_null().all(|s| s.parse::<f64>().is_ok()) {
        let data = values
            .iter()
            .map(|v| v.as_ref().and_then(|s| s.parse::<f64>().ok()))
            .collect();
        return Column::Float64(Float64Column::from_options(data));
    }

    if non_null().all(|s| parse_bool(s).is_some()) {
        let data = values
            .iter()
            .map(|v| v.as_ref().and_then(|s| parse_bool(s)))
            .collect();
        return Column::Boolean(BooleanColumn::from_options(data));
    }

    Column::String(StringColumn::from_options(values))
}

fn format_f64(v: f64) -> String {
    // Keep a fractional part so the column reads back as Float64
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Write a frame as CSV with a header row; nulls become empty fields
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv_to_writer(df, file)
}

pub fn write_csv_to_writer<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    wtr.write_record(df.column_names())?;

    for i in 0..df.row_count() {
        let mut row = Vec::with_capacity(df.column_count());
        for col in &df.columns {
            let field = match col {
                Column::Float64(c) => c.get(i)?.map(format_f64),
                other => other.get_value(i)?.map(|v| v.to_string()),
            };
            row.push(field.unwrap_or_default());
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
