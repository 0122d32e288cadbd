//! Ordering of report rows with the totals row pinned last.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::report_set::{FileRow, ReportSet, TotalsRow};

/// Sortable report column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    #[value(name = "file_name", alias = "name")]
    #[serde(alias = "name")]
    FileName,
    #[value(name = "translated")]
    Translated,
    #[value(name = "untranslated")]
    Untranslated,
    #[value(name = "not_allowed_translations", alias = "disallowed")]
    #[serde(rename = "not_allowed_translations", alias = "disallowed")]
    Disallowed,
    #[value(name = "total_per_file", alias = "total")]
    #[serde(rename = "total_per_file", alias = "total")]
    Total,
}

impl SortColumn {
    /// The key used for this column in table output and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            SortColumn::FileName => "file_name",
            SortColumn::Translated => "translated",
            SortColumn::Untranslated => "untranslated",
            SortColumn::Disallowed => "not_allowed_translations",
            SortColumn::Total => "total_per_file",
        }
    }

    pub fn all() -> [SortColumn; 5] {
        [
            SortColumn::FileName,
            SortColumn::Translated,
            SortColumn::Untranslated,
            SortColumn::Disallowed,
            SortColumn::Total,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Requested ordering. Defaults to file name, ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// One displayed row: either a file's counts or the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRow<'a> {
    File(&'a FileRow),
    Totals(&'a TotalsRow),
}

/// Value of a row under one column, for comparison and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue<'a> {
    Text(&'a str),
    Count(usize),
}

impl std::fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{}", text),
            CellValue::Count(count) => write!(f, "{}", count),
        }
    }
}

impl<'a> ReportRow<'a> {
    pub fn is_totals(&self) -> bool {
        matches!(self, ReportRow::Totals(_))
    }

    pub fn label(&self) -> &'a str {
        match *self {
            ReportRow::File(row) => &row.file_name,
            ReportRow::Totals(row) => &row.label,
        }
    }

    pub fn value(&self, column: SortColumn) -> CellValue<'a> {
        let (translated, untranslated, disallowed, total) = match *self {
            ReportRow::File(r) => (r.translated, r.untranslated, r.disallowed, r.total),
            ReportRow::Totals(r) => (r.translated, r.untranslated, r.disallowed, r.total),
        };
        match column {
            SortColumn::FileName => CellValue::Text(self.label()),
            SortColumn::Translated => CellValue::Count(translated),
            SortColumn::Untranslated => CellValue::Count(untranslated),
            SortColumn::Disallowed => CellValue::Count(disallowed),
            SortColumn::Total => CellValue::Count(total),
        }
    }
}

/// Order the report rows by `spec`, then move the totals row to the end.
///
/// The totals row takes part in the stable sort like any other row and is
/// re-appended afterwards, so it is last for every column and direction.
/// An empty report yields no rows.
pub fn sort_report<'a>(report: &'a ReportSet, spec: SortSpec) -> Vec<ReportRow<'a>> {
    let mut rows: Vec<ReportRow<'a>> = report.rows().iter().map(ReportRow::File).collect();
    if let Some(totals) = report.totals() {
        rows.push(ReportRow::Totals(totals));
    }
    if rows.is_empty() {
        return rows;
    }

    rows.sort_by(|a, b| compare(a, b, spec));

    if let Some(index) = rows.iter().position(ReportRow::is_totals) {
        let totals = rows.remove(index);
        rows.push(totals);
    }
    rows
}

fn compare(a: &ReportRow<'_>, b: &ReportRow<'_>, spec: SortSpec) -> Ordering {
    let ordering = a.value(spec.column).cmp(&b.value(spec.column));
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
