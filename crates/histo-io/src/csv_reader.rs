//! CSV file reader with type inference

use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, DataSchema};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Rows sampled for type inference
const INFERENCE_ROWS: usize = 100;

/// CSV file reader
pub struct CsvReader {
    path: String,
    schema: DataSchema,
    delimiter: u8,
    has_header: bool,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, b',', true)
    }

    /// Open a CSV file with options
    ///
    /// Without a header row, columns are named `col_0`, `col_1`, ...
    pub fn open_with_options(path: &str, delimiter: u8, has_header: bool) -> IoResult<Self> {
        let mut reader = Self::csv_reader(path, delimiter, has_header)?;
        let schema = Self::infer_schema(&mut reader, has_header)?;

        debug!(
            path,
            columns = schema.num_columns(),
            records = schema.num_records,
            "opened CSV"
        );

        Ok(Self {
            path: path.to_string(),
            schema,
            delimiter,
            has_header,
        })
    }

    fn csv_reader(
        path: &str,
        delimiter: u8,
        has_header: bool,
    ) -> IoResult<csv::Reader<BufReader<File>>> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Ok(csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_header)
            .flexible(true)
            .from_reader(BufReader::new(file)))
    }

    fn infer_schema(
        reader: &mut csv::Reader<BufReader<File>>,
        has_header: bool,
    ) -> IoResult<DataSchema> {
        // Without headers this peeks at the first record, which `records()`
        // still yields afterwards
        let first = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .clone();
        let headers: Vec<String> = if has_header {
            first.iter().map(|s| s.trim().to_string()).collect()
        } else {
            (0..first.len()).map(|i| format!("col_{}", i)).collect()
        };

        let mut sample_values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut num_records = 0;

        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            if num_records < INFERENCE_ROWS {
                for (i, value) in record.iter().enumerate() {
                    if let Some(sample) = sample_values.get_mut(i) {
                        sample.push(value.to_string());
                    }
                }
            }
            num_records += 1;
        }

        let columns: Vec<ColumnDescriptor> = headers
            .into_iter()
            .zip(sample_values.iter())
            .map(|(name, sample)| ColumnDescriptor::new(name, ColumnType::infer(sample)))
            .collect();

        Ok(DataSchema::new(columns, num_records))
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;

        let col_desc = &self.schema.columns[col_index];

        let mut reader = Self::csv_reader(&self.path, self.delimiter, self.has_header)?;
        let mut values = Vec::with_capacity(self.schema.num_records);
        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            // Short rows read as a missing cell
            values.push(record.get(col_index).unwrap_or_default().to_string());
        }

        Ok(DataColumn::from_cells(values, col_desc.dtype))
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_schema_inference() {
        let file = write_temp("id,value,label\n1,2.5,a\n2,3.5,b\n3,,c\n");
        let reader = CsvReader::open(file.path().to_str().unwrap()).unwrap();
        let schema = reader.read_schema().unwrap();

        assert_eq!(schema.num_records, 3);
        assert_eq!(schema.column_names(), vec!["id", "value", "label"]);
        assert_eq!(schema.column("id").unwrap().dtype, ColumnType::Int64);
        assert_eq!(schema.column("value").unwrap().dtype, ColumnType::Float64);
        assert_eq!(schema.column("label").unwrap().dtype, ColumnType::String);
    }

    #[test]
    fn test_read_column_keeps_rows() {
        let file = write_temp("value\n1\n\n3\n");
        let reader = CsvReader::open(file.path().to_str().unwrap()).unwrap();
        let column = reader.read_column("value").unwrap();
        assert_eq!(column.finite_values(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_no_header() {
        let file = write_temp("4,x\n5,y\n");
        let reader =
            CsvReader::open_with_options(file.path().to_str().unwrap(), b',', false).unwrap();
        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.column_names(), vec!["col_0", "col_1"]);
        assert_eq!(schema.num_records, 2);
        assert_eq!(reader.read_numeric_column("col_0").unwrap(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_reports_path_and_format() {
        let file = write_temp("value\n1\n");
        let path = file.path().to_str().unwrap();
        let reader = CsvReader::open(path).unwrap();
        assert_eq!(reader.path(), Some(path));
        assert_eq!(reader.format_name(), "CSV");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvReader::open("/definitely/not/here.csv"),
            Err(IoError::FileNotFound(_))
        ));
    }
}
