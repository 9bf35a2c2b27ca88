//! Schema and column types for tabular input

use serde::{Deserialize, Serialize};

use crate::numeric::{extract_numeric, parse_finite};

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// First column whose sampled values are all numeric
    pub fn first_numeric_column(&self) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.dtype.is_numeric())
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Inferred data type
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Column data type inferred from sampled cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Int64,
    Float64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Float64 | ColumnType::Int64)
    }

    /// Infer a column type from sample cells, ignoring empty cells
    pub fn infer<S: AsRef<str>>(values: &[S]) -> Self {
        let non_empty: Vec<&str> = values
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();
        if non_empty.is_empty() {
            return ColumnType::String;
        }

        if non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
            return ColumnType::Int64;
        }

        if non_empty.iter().all(|s| s.parse::<f64>().is_ok()) {
            return ColumnType::Float64;
        }

        if non_empty
            .iter()
            .all(|s| matches!(s.to_lowercase().as_str(), "true" | "false" | "yes" | "no"))
        {
            return ColumnType::Bool;
        }

        ColumnType::String
    }
}

/// A column of data
///
/// Numeric columns use NaN for cells that did not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Float64(Vec<f64>),
    String(Vec<String>),
}

impl DataColumn {
    /// Build a column from raw cells according to a type
    pub fn from_cells(cells: Vec<String>, dtype: ColumnType) -> Self {
        if dtype.is_numeric() {
            DataColumn::Float64(
                cells
                    .iter()
                    .map(|s| parse_finite(s).unwrap_or(f64::NAN))
                    .collect(),
            )
        } else {
            DataColumn::String(cells)
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The finite numeric values of the column, in row order
    ///
    /// Text cells are kept when they parse as finite numbers.
    pub fn finite_values(&self) -> Vec<f64> {
        match self {
            DataColumn::Float64(v) => v.iter().copied().filter(|x| x.is_finite()).collect(),
            DataColumn::String(v) => extract_numeric(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_column_lookup() {
        let schema = DataSchema::new(
            vec![
                ColumnDescriptor::new("name", ColumnType::String),
                ColumnDescriptor::new("x", ColumnType::Float64),
            ],
            100,
        );

        assert_eq!(schema.column_index("x"), Some(1));
        assert_eq!(schema.column_index("z"), None);
        assert_eq!(schema.first_numeric_column().unwrap().name, "x");
    }

    #[test]
    fn test_infer_type() {
        assert_eq!(ColumnType::infer(&["1", "2", ""]), ColumnType::Int64);
        assert_eq!(ColumnType::infer(&["1.5", "2", "3e2"]), ColumnType::Float64);
        assert_eq!(ColumnType::infer(&["true", "no"]), ColumnType::Bool);
        assert_eq!(ColumnType::infer(&["a", "1"]), ColumnType::String);
        assert_eq!(ColumnType::infer::<&str>(&[]), ColumnType::String);
    }

    #[test]
    fn test_finite_values() {
        let col = DataColumn::from_cells(
            vec!["1".into(), "".into(), "2.5".into(), "inf".into()],
            ColumnType::Float64,
        );
        assert_eq!(col.len(), 4);
        assert_eq!(col.finite_values(), vec![1.0, 2.5]);

        let text = DataColumn::from_cells(vec!["n/a".into(), "7".into()], ColumnType::String);
        assert_eq!(text.finite_values(), vec![7.0]);
    }
}
