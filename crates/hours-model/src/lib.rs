pub mod availability;
pub mod error;
pub mod fields;
pub mod options;
pub mod processing;

pub use availability::{
    DAY_ABBREVIATIONS, DayRange, NormalizedTime, ParsedAvailability, TimeRange,
    day_from_abbreviation,
};
pub use error::{HoursError, Result};
pub use fields::{DerivedField, DerivedValues};
pub use options::{
    DEFAULT_AVAILABILITY_COLUMN, DEFAULT_DELIMITER, DEFAULT_QUOTE, StandardizeOptions,
};
pub use processing::StandardizeReport;
