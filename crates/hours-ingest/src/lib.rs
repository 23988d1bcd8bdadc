//! Business-hours file ingestion.
//!
//! Reads a delimited file, runs every record's availability text through
//! `hours-transform` and writes the file back out with five derived columns
//! (`Day From`, `Day To`, `Time From`, `Time To`, `Notes`).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hours_ingest::standardize_file;
//! use hours_model::StandardizeOptions;
//!
//! let report = standardize_file(
//!     Path::new("providers.csv"),
//!     Path::new("providers_standardized.csv"),
//!     &StandardizeOptions::default(),
//! )?;
//! println!("{} rows", report.rows);
//! ```

mod csv;
mod error;
mod standardize;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading and Writing ===
pub use self::csv::{
    CsvTable, read_csv_table, read_csv_table_from, write_csv_table, write_csv_table_to,
};

// === Standardization ===
pub use standardize::{StandardizedTable, standardize_file, standardize_table};
