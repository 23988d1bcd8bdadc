//! Error types for reading, transforming and writing availability files.

use std::path::PathBuf;

use hours_model::HoursError;
use thiserror::Error;

/// Errors that abort a standardization pass.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or flush the output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Malformed or non-UTF-8 input.
    #[error("failed to parse CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize a record.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input has no header line.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Record Errors ===
    /// Header or row does not fit the output schema.
    #[error("{path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: HoursError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/hours.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/hours.csv");
    }

    #[test]
    fn test_record_error_display() {
        let err = IngestError::Record {
            path: PathBuf::from("hours.csv"),
            source: HoursError::MissingField {
                row: 2,
                column: "Availability".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "hours.csv: row 2: field 'Availability' is missing"
        );
    }
}
