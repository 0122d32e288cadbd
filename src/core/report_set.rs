//! Per-file rows and the aggregate totals row.

use serde::Serialize;

use crate::utils::format_plural;

/// Sealed counts for one scanned catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub file_name: String,
    pub translated: usize,
    pub untranslated: usize,
    pub disallowed: usize,
    pub total: usize,
}

/// Column-wise sums over every [`FileRow`], labelled with the file count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsRow {
    pub label: String,
    pub file_count: usize,
    pub translated: usize,
    pub untranslated: usize,
    pub disallowed: usize,
    pub total: usize,
}

impl TotalsRow {
    /// Sum the given rows. Returns `None` for an empty slice.
    pub fn from_rows(rows: &[FileRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let mut totals = TotalsRow {
            label: format_plural(rows.len(), "One file", "@count files"),
            file_count: rows.len(),
            translated: 0,
            untranslated: 0,
            disallowed: 0,
            total: 0,
        };
        for row in rows {
            totals.translated += row.translated;
            totals.untranslated += row.untranslated;
            totals.disallowed += row.disallowed;
            totals.total += row.total;
        }
        Some(totals)
    }
}

/// Rows of one report run, in scan order, plus the optional totals row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSet {
    rows: Vec<FileRow>,
    totals: Option<TotalsRow>,
}

impl ReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sealed file row.
    ///
    /// Rows added after the totals were computed would break the totals
    /// invariant, so the totals row is dropped and must be recomputed.
    pub fn push(&mut self, row: FileRow) {
        self.totals = None;
        self.rows.push(row);
    }

    /// Compute and attach the totals row. A no-op on an empty set.
    pub fn add_totals(&mut self) {
        self.totals = TotalsRow::from_rows(&self.rows);
    }

    pub fn rows(&self) -> &[FileRow] {
        &self.rows
    }

    pub fn totals(&self) -> Option<&TotalsRow> {
        self.totals.as_ref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
