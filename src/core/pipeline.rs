//! The scan loop: list catalogs, read each one, seal its row, add totals.
//!
//! Files are processed strictly one after another. The first file that
//! cannot be opened or has no valid header aborts the whole run.

use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

use super::{
    aggregate::FileCounts,
    catalog::{CatalogError, CatalogSource, PoSource},
    error::PipelineError,
    report_set::ReportSet,
    safety::{MarkupPolicy, SafetyPolicy},
};

pub const DEFAULT_EXTENSION: &str = "po";

/// Non-fatal conditions reported alongside a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportWarning {
    NoCatalogsFound { folder: PathBuf, extension: String },
}

impl std::fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportWarning::NoCatalogsFound { folder, extension } => {
                write!(f, "No {} file was found in {}", extension, folder.display())
            }
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Default)]
pub struct ReportOutcome {
    pub report: ReportSet,
    pub warnings: Vec<ReportWarning>,
}

/// Wires the catalog source and the safety policy into the scan loop.
pub struct Pipeline<'a> {
    source: &'a dyn CatalogSource,
    policy: &'a dyn SafetyPolicy,
    extension: String,
    verbose: bool,
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Pipeline::new(&PoSource, &MarkupPolicy)
    }
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn CatalogSource, policy: &'a dyn SafetyPolicy) -> Self {
        Self {
            source,
            policy,
            extension: DEFAULT_EXTENSION.to_string(),
            verbose: false,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan every matching catalog directly inside `folder`.
    ///
    /// An empty folder is not an error: the outcome carries an empty report
    /// without totals and a [`ReportWarning::NoCatalogsFound`].
    pub fn run(&self, folder: &Path) -> Result<ReportOutcome, PipelineError> {
        let files = list_catalog_files(folder, &self.extension)?;

        if files.is_empty() {
            return Ok(ReportOutcome {
                report: ReportSet::new(),
                warnings: vec![ReportWarning::NoCatalogsFound {
                    folder: folder.to_path_buf(),
                    extension: self.extension.clone(),
                }],
            });
        }

        let mut report = self.scan_files(&files)?;
        report.add_totals();

        Ok(ReportOutcome {
            report,
            warnings: Vec::new(),
        })
    }

    /// Build one row per file, in the given order. Totals are not added.
    pub fn scan_files(&self, files: &[PathBuf]) -> Result<ReportSet, PipelineError> {
        let mut report = ReportSet::new();
        let mut counts = FileCounts::new();

        for path in files {
            counts.reset();
            let language = self.scan_file(path, &mut counts)?;

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            if self.verbose {
                eprintln!(
                    "{} {} [{}]: {} string(s), {} translated, {} untranslated, {} not allowed",
                    "scanned".bold().green(),
                    file_name,
                    language.as_deref().unwrap_or("no language"),
                    counts.total,
                    counts.translated,
                    counts.untranslated,
                    counts.disallowed
                );
            }

            report.push(counts.seal(file_name));
        }

        Ok(report)
    }

    /// Count every item of one catalog and return its header language.
    fn scan_file(
        &self,
        path: &Path,
        counts: &mut FileCounts,
    ) -> Result<Option<String>, PipelineError> {
        let mut reader = self.source.open(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(header) = reader.header() else {
            return Err(PipelineError::Format {
                path: path.to_path_buf(),
                reason: "missing or malformed header".to_string(),
            });
        };
        let language = header.language().map(str::to_string);

        while let Some(item) = reader.read_item().map_err(|err| catalog_error(path, err))? {
            counts.add_item(&item, self.policy);
        }

        Ok(language)
    }
}

fn catalog_error(path: &Path, err: CatalogError) -> PipelineError {
    match err {
        CatalogError::Io(source) => PipelineError::Io {
            path: path.to_path_buf(),
            source,
        },
        CatalogError::Syntax { .. } => PipelineError::Format {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}

/// Regular files directly inside `folder` whose extension is `extension`.
///
/// Subdirectories are not descended into. The order is whatever the
/// filesystem yields; callers sort the finished report instead.
pub fn list_catalog_files(folder: &Path, extension: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| folder.to_path_buf());
            PipelineError::Io {
                path,
                source: err.into(),
            }
        })?;

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}
