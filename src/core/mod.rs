//! Core reporting engine.
//!
//! The pipeline runs in four phases:
//!
//! 1. **Scan**: list the catalog files directly inside the configured folder
//! 2. **Read**: open each catalog, require its header, pull items lazily
//! 3. **Classify**: count every translation string (plural forms separately)
//!    as translated, untranslated or not allowed
//! 4. **Aggregate**: seal one row per file, then append the totals row
//!
//! Sorting and table building happen afterwards on the finished report.

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod pipeline;
pub mod report_set;
pub mod safety;
pub mod sort;
pub mod table;

pub use aggregate::FileCounts;
pub use catalog::{
    CatalogError, CatalogHeader, CatalogReader, CatalogSource, PoReader, PoSource,
    TranslationItem,
};
pub use classify::{Classification, classify};
pub use error::PipelineError;
pub use pipeline::{Pipeline, ReportOutcome, ReportWarning, list_catalog_files};
pub use report_set::{FileRow, ReportSet, TotalsRow};
pub use safety::{MarkupPolicy, SafetyPolicy};
pub use sort::{ReportRow, SortColumn, SortDirection, SortSpec, sort_report};
pub use table::{Column, Table};
