//! Terminal tables for check and import results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use podium_model::ImportLog;

use crate::commands::{CheckResult, ImportResult};

pub fn print_check_summary(result: &CheckResult) {
    println!("Sheet: {} ({})", result.path.display(), result.sheet);
    println!("Rows: {}", result.rows);
    if !result.events.is_empty() {
        println!("{}", events_table(result));
    }
    print_errors(&result.errors);
}

pub fn print_import_summary(result: &ImportResult) {
    println!("Sheet: {} ({})", result.check.path.display(), result.check.sheet);
    if result.dry_run {
        println!("Dry run: nothing was written");
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    if !result.log.is_empty() {
        println!("{}", outcome_table(&result.log));
    }
    print_errors(&result.check.errors);
}

/// One row per event with its placement count.
pub fn events_table(result: &CheckResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Event"), header_cell("Placements")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut total = 0usize;
    for event in &result.events {
        total += event.placements;
        table.add_row(vec![Cell::new(&event.event_key), Cell::new(event.placements)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    table
}

/// One row per import outcome, in log order.
pub fn outcome_table(log: &ImportLog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Event"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);

    for outcome in log {
        let status = if outcome.ok {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(&outcome.event_key),
            status,
            Cell::new(&outcome.message),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} imported, {} failed",
            log.imported_count(),
            log.failed_count()
        ))
        .add_attribute(Attribute::Bold),
    ]);
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
        .set_width(120);
}

fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for error in errors {
        eprintln!("- {error}");
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
