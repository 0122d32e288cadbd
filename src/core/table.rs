//! Presentation-neutral table descriptor for a sorted report.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{
    report_set::ReportSet,
    sort::{CellValue, SortColumn, SortDirection, SortSpec, sort_report},
};

/// A column definition: what to show and the key to sort by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub label: &'static str,
    pub sort_key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortDirection>,
}

impl Column {
    pub fn for_sort_column(column: SortColumn) -> Self {
        let label = match column {
            SortColumn::FileName => "File name",
            SortColumn::Translated => "Translated",
            SortColumn::Untranslated => "Untranslated",
            SortColumn::Disallowed => "Not Allowed Translations",
            SortColumn::Total => "Total Per File",
        };
        Column {
            label,
            sort_key: column.key(),
            default_sort: (column == SortColumn::FileName).then_some(SortDirection::Asc),
        }
    }
}

/// The report's column definitions, in display order.
pub fn header() -> Vec<Column> {
    SortColumn::all()
        .into_iter()
        .map(Column::for_sort_column)
        .collect()
}

/// Sorted rows mapping each column key to its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub header: Vec<Column>,
    pub rows: Vec<Map<String, Value>>,
    /// True when the last row is the totals row.
    #[serde(skip)]
    pub has_totals: bool,
}

impl Table {
    pub fn build(report: &ReportSet, spec: SortSpec) -> Self {
        let sorted = sort_report(report, spec);
        let has_totals = sorted.last().is_some_and(|row| row.is_totals());

        let rows = sorted
            .iter()
            .map(|row| {
                SortColumn::all()
                    .into_iter()
                    .map(|column| {
                        let value = match row.value(column) {
                            CellValue::Text(text) => Value::from(text),
                            CellValue::Count(count) => Value::from(count),
                        };
                        (column.key().to_string(), value)
                    })
                    .collect::<Map<String, Value>>()
            })
            .collect();

        Table {
            header: header(),
            rows,
            has_totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row cells as display strings, in column order.
    pub fn cell_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .iter()
                    .map(|column| match row.get(column.sort_key) {
                        Some(Value::String(text)) => text.clone(),
                        Some(value) => value.to_string(),
                        None => String::new(),
                    })
                    .collect()
            })
            .collect()
    }
}
