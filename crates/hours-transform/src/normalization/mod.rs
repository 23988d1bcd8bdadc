//! Token-level normalization.

pub mod time;

pub use time::{normalize_time, parse_12_hour, to_12_hour};
