use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use hours_ingest::standardize_file;
use hours_model::{ParsedAvailability, StandardizeOptions, StandardizeReport};
use hours_transform::transform_availability;

use crate::cli::{ParseArgs, ParseFormatArg, StandardizeArgs};
use crate::summary::parsed_table;

pub fn run_standardize(args: &StandardizeArgs) -> Result<StandardizeReport> {
    let options = standardize_options(args)?;
    debug!(?options, "standardize options");
    let report = standardize_file(&args.input, &args.output, &options).with_context(|| {
        format!(
            "standardize {} -> {}",
            args.input.display(),
            args.output.display()
        )
    })?;
    info!(rows = report.rows, "standardization complete");
    Ok(report)
}

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let entries: Vec<(String, ParsedAvailability)> = args
        .texts
        .iter()
        .map(|text| (text.clone(), transform_availability(text)))
        .collect();
    match args.format {
        ParseFormatArg::Table => println!("{}", parsed_table(&entries)),
        ParseFormatArg::Json => println!("{}", parsed_json(&entries)?),
    }
    Ok(())
}

/// Build processing options from CLI flags.
pub fn standardize_options(args: &StandardizeArgs) -> Result<StandardizeOptions> {
    let delimiter = ascii_byte("delimiter", args.delimiter)?;
    let quote = ascii_byte("quote", args.quote)?;
    if delimiter == quote {
        bail!("delimiter and quote must differ, both are {:?}", args.delimiter);
    }
    Ok(StandardizeOptions::default()
        .with_column(args.column.clone())
        .with_delimiter(delimiter)
        .with_quote(quote)
        .with_dry_run(args.dry_run))
}

fn ascii_byte(name: &str, value: char) -> Result<u8> {
    if !value.is_ascii() {
        bail!("{name} must be a single ASCII character, got {value:?}");
    }
    u8::try_from(value).with_context(|| format!("{name} {value:?}"))
}

/// Render parse results as a JSON array of `{ text, parsed, fields }` objects.
pub fn parsed_json(entries: &[(String, ParsedAvailability)]) -> Result<String> {
    let values: Vec<serde_json::Value> = entries
        .iter()
        .map(|(text, parsed)| -> Result<serde_json::Value, serde_json::Error> {
            let fields: serde_json::Map<String, serde_json::Value> = parsed
                .derived_values()
                .iter()
                .map(|(field, value)| (field.header().to_string(), value.into()))
                .collect();
            Ok(serde_json::json!({
                "text": text,
                "parsed": serde_json::to_value(parsed)?,
                "fields": fields,
            }))
        })
        .collect::<Result<_, serde_json::Error>>()
        .context("serialize parse results")?;
    serde_json::to_string_pretty(&values).context("serialize parse results")
}

pub fn success_message(report: &StandardizeReport) -> String {
    match &report.output {
        Some(path) => format!(
            "Availability times have been standardized and structured into separate columns in {}.",
            path.display()
        ),
        None => format!("Dry run: {} rows parsed, no output written.", report.rows),
    }
}
