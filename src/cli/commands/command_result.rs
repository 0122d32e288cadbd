use std::path::PathBuf;

use super::super::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{PipelineError, ReportWarning, Table};

#[derive(Debug)]
pub enum CommandSummary {
    Report(ReportSummary),
    ReportAborted(AbortSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ReportSummary {
    pub folder: PathBuf,
    pub format: OutputFormat,
    pub table: Table,
    pub warnings: Vec<ReportWarning>,
    /// Number of catalog files that were scanned.
    pub files_scanned: usize,
}

#[derive(Debug)]
pub struct AbortSummary {
    pub folder: PathBuf,
    pub error: PipelineError,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub folder_path: String,
}

/// Result of running poreport commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
