//! Delimited file writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use hours_model::StandardizeOptions;

use crate::error::{IngestError, Result};

/// Write a header and rows to `path`, replacing any existing file.
pub fn write_csv_table<R>(
    path: &Path,
    headers: &[String],
    rows: &[R],
    options: &StandardizeOptions,
) -> Result<()>
where
    R: AsRef<[String]>,
{
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_table_to(file, path, headers, rows, options)
}

/// Write a header and rows to any writer. `path` only labels errors.
///
/// Records end with CRLF and fields are quoted only when they contain the
/// delimiter, the quote character or a line break.
pub fn write_csv_table_to<W, R>(
    writer: W,
    path: &Path,
    headers: &[String],
    rows: &[R],
    options: &StandardizeOptions,
) -> Result<()>
where
    W: Write,
    R: AsRef<[String]>,
{
    let csv_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .flexible(false)
        .from_writer(writer);

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.as_ref()).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(headers: &[&str], rows: &[Vec<String>]) -> String {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let mut buffer = Vec::new();
        write_csv_table_to(
            &mut buffer,
            Path::new("out.csv"),
            &headers,
            rows,
            &StandardizeOptions::default(),
        )
        .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn writes_crlf_records() {
        let rows = vec![vec!["1".to_string(), "Mon".to_string()]];
        assert_eq!(to_string(&["A", "B"], &rows), "A;B\r\n1;Mon\r\n");
    }

    #[test]
    fn quotes_only_when_needed() {
        let rows = vec![vec![
            "a;b".to_string(),
            "say \"hi\"".to_string(),
            "plain text".to_string(),
        ]];
        assert_eq!(
            to_string(&["A", "B", "C"], &rows),
            "A;B;C\r\n\"a;b\";\"say \"\"hi\"\"\";plain text\r\n"
        );
    }
}
