use thiserror::Error;

/// Errors raised while mapping input rows onto the output schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HoursError {
    /// The availability column is absent from the header.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: String },

    /// A data row is too short to carry the availability field.
    #[error("row {row}: field '{column}' is missing")]
    MissingField { row: usize, column: String },

    /// A data row has more fields than the header names.
    #[error("row {row}: expected at most {expected} fields, found {found}")]
    UnexpectedFields {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, HoursError>;
