//! Row-level transformation: locate the availability field, parse it and
//! merge the derived columns into the record.

use tracing::debug;

use hours_model::{DerivedField, HoursError, ParsedAvailability, Result};

use crate::availability::parse_availability;

/// Parse a raw field value as read from the file.
///
/// Surrounding whitespace is trimmed before parsing, so a note carries the
/// trimmed text.
pub fn transform_availability(raw: &str) -> ParsedAvailability {
    parse_availability(raw.trim())
}

/// A transformed record: the parse result plus the output fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedRow {
    pub parsed: ParsedAvailability,
    pub fields: Vec<String>,
}

/// Output header layout, fixed once from the input header and reused for
/// every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSchema {
    headers: Vec<String>,
    input_width: usize,
    availability_column: String,
    availability_index: usize,
}

impl OutputSchema {
    /// Build the output layout from the input header names.
    ///
    /// Input names are kept exactly as read and the five derived columns are
    /// always appended after them in [`DerivedField::ALL`] order, even when
    /// an input column already carries one of those names. The availability
    /// column is matched exactly, ignoring only a leading UTF-8 BOM.
    ///
    /// # Errors
    ///
    /// Returns [`HoursError::MissingColumn`] when no header equals
    /// `availability_column`.
    pub fn from_headers<I, S>(headers: I, availability_column: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut output: Vec<String> = headers
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        let input_width = output.len();
        let availability_index = output
            .iter()
            .position(|name| strip_bom(name) == availability_column)
            .ok_or_else(|| HoursError::MissingColumn {
                column: availability_column.to_string(),
            })?;
        output.extend(DerivedField::ALL.map(|field| field.header().to_string()));

        debug!(
            availability_index,
            input_width,
            output_width = output.len(),
            "output schema resolved"
        );

        Ok(Self {
            headers: output,
            input_width,
            availability_column: availability_column.to_string(),
            availability_index,
        })
    }

    /// Output header names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn availability_index(&self) -> usize {
        self.availability_index
    }

    /// Output position of a derived column.
    pub fn derived_index(&self, field: DerivedField) -> usize {
        self.input_width + field.index()
    }

    /// Transform one data row. `row` is the 1-based record number used in
    /// error messages.
    ///
    /// Original fields are copied verbatim; fields missing at the end of a
    /// short row are written empty.
    ///
    /// # Errors
    ///
    /// - [`HoursError::UnexpectedFields`] when the row is wider than the header.
    /// - [`HoursError::MissingField`] when the row ends before the
    ///   availability field.
    pub fn transform_row<S: AsRef<str>>(&self, row: usize, fields: &[S]) -> Result<TransformedRow> {
        if fields.len() > self.input_width {
            return Err(HoursError::UnexpectedFields {
                row,
                expected: self.input_width,
                found: fields.len(),
            });
        }
        let raw: &str = fields
            .get(self.availability_index)
            .ok_or_else(|| HoursError::MissingField {
                row,
                column: self.availability_column.clone(),
            })?
            .as_ref();

        let parsed = transform_availability(raw);

        let mut output: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();
        output.resize(self.input_width, String::new());
        output.extend(parsed.derived_values().into_inner());

        Ok(TransformedRow {
            parsed,
            fields: output,
        })
    }
}

fn strip_bom(name: &str) -> &str {
    name.strip_prefix('\u{feff}').unwrap_or(name)
}
