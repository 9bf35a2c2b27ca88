//! Data reader trait and common types
//!
//! The `DataReader` trait gives the histogram a uniform way to pull one
//! numeric column out of a tabular source.

use crate::schema::{DataColumn, DataSchema};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column '{0}' has no numeric values")]
    NoNumericValues(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for reading tabular data from various formats
pub trait DataReader: Send + Sync {
    /// Read the schema (column names, types, record count)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Read a single column by name
    fn read_column(&self, name: &str) -> IoResult<DataColumn>;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;

    /// Read a column and keep only its finite numeric values
    ///
    /// Fails with `NoNumericValues` if nothing survives the filter.
    fn read_numeric_column(&self, name: &str) -> IoResult<Vec<f64>> {
        let column = self.read_column(name)?;
        let values = column.finite_values();
        debug!(
            column = name,
            rows = column.len(),
            kept = values.len(),
            "filtered column to finite values"
        );
        if values.is_empty() {
            return Err(IoError::NoNumericValues(name.to_string()));
        }
        Ok(values)
    }
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    let extension = path
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "csv")]
        "csv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open(path)?))
        }

        #[cfg(feature = "csv")]
        "tsv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open_with_options(path, b'\t', true)?))
        }

        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {}",
            extension
        ))),
    }
}
