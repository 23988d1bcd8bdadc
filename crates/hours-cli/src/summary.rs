use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hours_model::{DerivedField, ParsedAvailability, StandardizeReport};

pub fn print_summary(report: &StandardizeReport) {
    println!("{}", summary_table(report));
}

/// Row counts per category, one table row each.
pub fn summary_table(report: &StandardizeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Day range", report.day_ranges, Color::Green),
        ("Time range", report.time_ranges, Color::Green),
        ("Notes (appointment / always open)", report.notes, Color::Blue),
        ("Time kept verbatim", report.unparsed_times, Color::Yellow),
        ("Nothing extracted", report.unmatched, Color::Yellow),
    ];
    for (label, count, color) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count, color)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.rows).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One row per parsed text with the five derived columns.
pub fn parsed_table(entries: &[(String, ParsedAvailability)]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Availability")];
    header.extend(DerivedField::ALL.iter().map(|field| header_cell(field.header())));
    table.set_header(header);
    apply_table_style(&mut table);
    for (text, parsed) in entries {
        let mut row = vec![Cell::new(text)];
        row.extend(parsed.derived_values().iter().map(|(_, value)| value_cell(value)));
        table.add_row(row);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
