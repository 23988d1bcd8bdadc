//! Business-hours transformation.
//!
//! - **normalization**: 12-hour clock tokens to `HH:MM`
//! - **availability**: free-text descriptions to day/time ranges or notes
//! - **row**: output schema and per-record merging of the derived columns

pub mod availability;
pub mod normalization;
pub mod row;

pub use availability::{
    SPECIAL_CASE_MARKERS, extract_days, extract_time_range, is_special_case, parse_availability,
};
pub use normalization::{normalize_time, parse_12_hour, to_12_hour};
pub use row::{OutputSchema, TransformedRow, transform_availability};
