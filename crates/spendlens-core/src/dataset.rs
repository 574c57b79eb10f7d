//! In-memory tabular dataset with CSV reading and writing
//!
//! Cells are kept as strings exactly as read. Columns other than the text
//! column are never interpreted and are written back unchanged.

use std::io::{Read, Write};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a CSV with a header row.
    ///
    /// Rows shorter than the header are kept as-is (missing cells read as
    /// absent). Rows longer than the header are rejected.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();

        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            if record.len() > headers.len() {
                return Err(Error::InvalidData(format!(
                    "Row {} has {} fields, header has {}",
                    i + 1,
                    record.len(),
                    headers.len()
                )));
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!("Read {} rows with {} columns", rows.len(), headers.len());
        Ok(Self { headers, rows })
    }

    /// Write as CSV: header row, comma-separated, minimal quoting.
    /// Short rows are padded with empty cells.
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().flexible(false).from_writer(writer);
        wtr.write_record(&self.headers)?;

        let width = self.headers.len();
        for row in &self.rows {
            let padded = row
                .iter()
                .map(String::as_str)
                .chain(std::iter::repeat("").take(width.saturating_sub(row.len())));
            wtr.write_record(padded)?;
        }

        wtr.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at (row, column name), `None` when the column or cell is absent
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Set a column's values, replacing it in place if it exists and
    /// appending it otherwise. `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::InvalidData(format!(
                "Column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        let idx = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                self.headers.len() - 1
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() <= idx {
                row.resize(idx + 1, String::new());
            }
            row[idx] = value;
        }

        Ok(())
    }
}
