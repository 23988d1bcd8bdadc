//! Single-pass standardization of an availability file.
//!
//! All rows are read and transformed before anything is written, so a
//! record error never leaves a partial output file behind.

use std::path::Path;

use tracing::{debug, info, info_span, trace};

use hours_model::{StandardizeOptions, StandardizeReport};
use hours_transform::OutputSchema;

use crate::csv::{CsvTable, read_csv_table, write_csv_table};
use crate::error::{IngestError, Result};

/// Transformed rows ready to be written.
#[derive(Debug, Clone)]
pub struct StandardizedTable {
    pub schema: OutputSchema,
    pub rows: Vec<Vec<String>>,
    pub report: StandardizeReport,
}

/// Map every row of `table` onto the output schema, in input order.
///
/// `path` only labels errors.
pub fn standardize_table(
    table: &CsvTable,
    path: &Path,
    options: &StandardizeOptions,
) -> Result<StandardizedTable> {
    let record_error = |source| IngestError::Record {
        path: path.to_path_buf(),
        source,
    };
    let schema = OutputSchema::from_headers(&table.headers, &options.availability_column)
        .map_err(record_error)?;

    let mut report = StandardizeReport::default();
    let mut rows = Vec::with_capacity(table.rows.len());
    for (idx, record) in table.rows.iter().enumerate() {
        let row = idx + 1;
        let fields: Vec<&str> = record.iter().collect();
        let transformed = schema.transform_row(row, &fields).map_err(record_error)?;
        trace!(
            row,
            note = transformed.parsed.is_note(),
            days = transformed.parsed.days().is_some(),
            hours = transformed.parsed.hours().is_some(),
            "row standardized"
        );
        report.record(&transformed.parsed);
        rows.push(transformed.fields);
    }

    debug!(
        rows = report.rows,
        notes = report.notes,
        unmatched = report.unmatched,
        "rows standardized"
    );

    Ok(StandardizedTable {
        schema,
        rows,
        report,
    })
}

/// Read `input`, derive the day/time/notes columns and write `output`.
///
/// With `options.dry_run` set the output file is neither created nor
/// touched, and the returned report has no output path.
pub fn standardize_file(
    input: &Path,
    output: &Path,
    options: &StandardizeOptions,
) -> Result<StandardizeReport> {
    let span = info_span!(
        "standardize",
        input = %input.display(),
        column = %options.availability_column
    );
    let _guard = span.enter();

    let table = read_csv_table(input, options)?;
    info!(rows = table.rows.len(), "input loaded");

    let StandardizedTable {
        schema,
        rows,
        mut report,
    } = standardize_table(&table, input, options)?;

    if options.dry_run {
        info!("dry run, output not written");
    } else {
        write_csv_table(output, schema.headers(), &rows, options)?;
        report.output = Some(output.to_path_buf());
        info!(output = %output.display(), rows = rows.len(), "output written");
    }

    Ok(report)
}
