use std::{env, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::ReportCommand, exit_status::ExitStatus};
use super::{AbortSummary, CommandResult, CommandSummary, ReportSummary};
use crate::{
    config::{load_config, validate_extension, validate_folder},
    core::{MarkupPolicy, Pipeline, PoSource, SortSpec, Table},
};

pub fn report(cmd: ReportCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let verbose = args.common.verbose;
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let loaded = load_config(&cwd)?;
    if verbose && let Some(path) = &loaded.path {
        eprintln!("{} {}", "config:".bold().cyan(), path.display());
    }
    let config = &loaded.config;

    // Folder validation happens before any catalog is touched
    let folder = match &args.common.folder {
        Some(folder) => validate_folder(folder, &cwd)?,
        None => validate_folder(Path::new(&config.folder_path), &loaded.base_dir(&cwd))?,
    };

    let extension = args.extension.unwrap_or_else(|| config.extension.clone());
    validate_extension(&extension)?;

    let spec = SortSpec::new(
        args.sort.unwrap_or(config.sort),
        args.order.unwrap_or(config.order),
    );

    let pipeline = Pipeline::new(&PoSource, &MarkupPolicy)
        .with_extension(extension)
        .verbose(verbose);

    let result = match pipeline.run(&folder) {
        Ok(outcome) => CommandResult {
            summary: CommandSummary::Report(ReportSummary {
                files_scanned: outcome.report.len(),
                table: Table::build(&outcome.report, spec),
                warnings: outcome.warnings,
                format: args.format,
                folder,
            }),
            exit_status: ExitStatus::Success,
        },
        Err(error) => CommandResult {
            summary: CommandSummary::ReportAborted(AbortSummary { folder, error }),
            exit_status: ExitStatus::Failure,
        },
    };

    Ok(result)
}
