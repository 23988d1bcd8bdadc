//! Derived output columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five columns derived from the availability text.
///
/// Variants are declared in output order; [`DerivedField::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedField {
    DayFrom,
    DayTo,
    TimeFrom,
    TimeTo,
    Notes,
}

impl DerivedField {
    /// Number of derived columns.
    pub const COUNT: usize = 5;

    /// All derived columns in the order they are appended to the header.
    pub const ALL: [DerivedField; Self::COUNT] = [
        Self::DayFrom,
        Self::DayTo,
        Self::TimeFrom,
        Self::TimeTo,
        Self::Notes,
    ];

    /// Header name written to the output file.
    pub const fn header(self) -> &'static str {
        match self {
            Self::DayFrom => "Day From",
            Self::DayTo => "Day To",
            Self::TimeFrom => "Time From",
            Self::TimeTo => "Time To",
            Self::Notes => "Notes",
        }
    }

    /// Position of this column within [`DerivedField::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DerivedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Rendered text of the five derived columns for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedValues([String; DerivedField::COUNT]);

impl DerivedValues {
    pub fn new(values: [String; DerivedField::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, field: DerivedField) -> &str {
        &self.0[field.index()]
    }

    /// Pairs of column and value in output order.
    pub fn iter(&self) -> impl Iterator<Item = (DerivedField, &str)> {
        DerivedField::ALL
            .into_iter()
            .zip(self.0.iter().map(String::as_str))
    }

    pub fn into_inner(self) -> [String; DerivedField::COUNT] {
        self.0
    }
}
