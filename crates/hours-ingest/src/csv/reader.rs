//! Delimited file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use hours_model::StandardizeOptions;

use crate::error::{IngestError, Result};

/// Header and data records of an input file, in file order.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<StringRecord>,
}

/// Read a delimited file using the delimiter and quote from `options`.
pub fn read_csv_table(path: &Path, options: &StandardizeOptions) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_table_from(file, path, options)
}

/// Read delimited text from any reader. `path` only labels errors.
///
/// Rows may be shorter or longer than the header; width checks happen when
/// rows are mapped onto the output schema.
pub fn read_csv_table_from<R: Read>(
    reader: R,
    path: &Path,
    options: &StandardizeOptions,
) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "csv loaded"
    );

    Ok(CsvTable {
        headers: headers.iter().map(str::to_string).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(contents: &str) -> Result<CsvTable> {
        read_csv_table_from(
            contents.as_bytes(),
            Path::new("test.csv"),
            &StandardizeOptions::default(),
        )
    }

    #[test]
    fn reads_semicolon_delimited_rows() {
        let table = read("Name;Availability\nShop;\"Mon;Tue 9am-5pm\"\n").unwrap();
        assert_eq!(table.headers, vec!["Name", "Availability"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(&table.rows[0][1], "Mon;Tue 9am-5pm");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(read(""), Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn ragged_rows_are_accepted() {
        let table = read("A;B;C\n1\n1;2;3;4\n").unwrap();
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }
}
