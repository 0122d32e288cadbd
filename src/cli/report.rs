//! Report formatting and printing utilities.
//!
//! This module renders command results as an aligned text table or as JSON.
//! Separate from core logic to allow poreport to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{AbortSummary, CommandResult, CommandSummary, InitSummary, ReportSummary},
};
use crate::{core::Table, utils::format_plural};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Gap between two table columns.
const COLUMN_GAP: &str = "  ";

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Report(summary) => print_report(summary, verbose),
        CommandSummary::ReportAborted(summary) => print_aborted(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_report(summary: &ReportSummary, verbose: bool) {
    let mut stderr = io::stderr().lock();
    for warning in &summary.warnings {
        let _ = writeln!(stderr, "{} {}", "warning:".bold().yellow(), warning);
    }

    match summary.format {
        OutputFormat::Json => print_json(&summary.table),
        OutputFormat::Text => {
            if !summary.table.is_empty() {
                print_table(&summary.table);
                print_success(summary.files_scanned, &summary.folder.display().to_string());
            }
        }
    }

    if verbose {
        let _ = writeln!(
            stderr,
            "{} {}",
            "folder:".bold().cyan(),
            summary.folder.display()
        );
    }
}

fn print_aborted(summary: &AbortSummary) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{} {}", "error:".bold().red(), summary.error);
    let _ = writeln!(
        stderr,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "Report aborted, no results for {}",
            summary.folder.display()
        )
        .red()
    );
}

fn print_init(summary: &InitSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Created {} (folder: {})",
            summary.path.display(),
            summary.folder_path
        )
        .green()
    );
}

/// Print the table as pretty JSON to stdout.
pub fn print_json(table: &Table) {
    print_json_to(table, &mut io::stdout().lock());
}

/// Print the table as pretty JSON to a custom writer.
pub fn print_json_to<W: Write>(table: &Table, writer: &mut W) {
    match serde_json::to_string_pretty(table) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(err) => {
            eprintln!("{} Failed to serialize report: {}", "error:".bold().red(), err);
        }
    }
}

/// Print the table with aligned columns to stdout.
pub fn print_table(table: &Table) {
    print_table_to(table, &mut io::stdout().lock());
}

/// Print the table with aligned columns to a custom writer.
///
/// The first column is left-aligned, count columns are right-aligned, and
/// the totals row is separated from the file rows by a rule.
pub fn print_table_to<W: Write>(table: &Table, writer: &mut W) {
    let cells = table.cell_texts();
    let widths = column_widths(table, &cells);

    let header: Vec<String> = table
        .header
        .iter()
        .zip(&widths)
        .enumerate()
        .map(|(i, (column, width))| align(column.label, *width, i == 0))
        .collect();
    let _ = writeln!(writer, "{}", header.join(COLUMN_GAP).bold());

    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    let totals_index = table.has_totals.then(|| cells.len() - 1);

    for (row_index, row) in cells.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| align(cell, *width, i == 0))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);

        if Some(row_index) == totals_index {
            let _ = writeln!(writer, "{}", "-".repeat(rule_width).dimmed());
            let _ = writeln!(writer, "{}", line.bold());
        } else {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

/// Print a success line after the table.
pub fn print_success(files: usize, folder: &str) {
    print_success_to(files, folder, &mut io::stdout().lock());
}

/// Print a success line to a custom writer.
pub fn print_success_to<W: Write>(files: usize, folder: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} in {}",
            format_plural(files, "1 catalog", "@count catalogs"),
            folder
        )
        .green()
    );
}

fn column_widths(table: &Table, cells: &[Vec<String>]) -> Vec<usize> {
    table
        .header
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| UnicodeWidthStr::width(row[i].as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(column.label)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Pad `text` to `width` display columns.
///
/// The last column is right-aligned without trailing spaces, so lines never
/// end in whitespace.
fn align(text: &str, width: usize, left: bool) -> String {
    let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)));
    if left {
        format!("{}{}", text, padding)
    } else {
        format!("{}{}", padding, text)
    }
}
