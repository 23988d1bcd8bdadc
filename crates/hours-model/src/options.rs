//! Configuration options for a standardization pass.

use serde::{Deserialize, Serialize};

/// Column holding the raw availability text.
pub const DEFAULT_AVAILABILITY_COLUMN: &str = "Availability";

/// Field separator for input and output files.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Quote character for input and output files.
pub const DEFAULT_QUOTE: u8 = b'"';

/// Options controlling how a file is read, transformed and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizeOptions {
    /// Header name of the column to parse.
    pub availability_column: String,

    /// Field separator, shared by reader and writer.
    pub delimiter: u8,

    /// Quote character, shared by reader and writer.
    pub quote: u8,

    /// Parse and report without writing the output file.
    pub dry_run: bool,
}

impl Default for StandardizeOptions {
    fn default() -> Self {
        Self {
            availability_column: DEFAULT_AVAILABILITY_COLUMN.to_string(),
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            dry_run: false,
        }
    }
}

impl StandardizeOptions {
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.availability_column = column.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
