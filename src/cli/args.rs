//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all poreport commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `report`: Scan a folder of PO catalogs and print per-file translation counts
//! - `init`: Initialize poreport configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::{SortColumn, SortDirection};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Report(cmd)) => cmd.args.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Folder containing the catalog files (overrides config file)
    #[arg(long, env = "POREPORT_FOLDER")]
    pub folder: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Column to sort by (overrides config file)
    #[arg(long, value_enum)]
    pub sort: Option<SortColumn>,

    /// Sort direction (overrides config file)
    #[arg(long, value_enum)]
    pub order: Option<SortDirection>,

    /// Catalog file extension (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub args: ReportArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Folder to store in the new configuration file
    #[arg(long)]
    pub folder: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translated, untranslated and not allowed strings per catalog file
    Report(ReportCommand),
    /// Initialize a new .poreportrc.json configuration file
    Init(InitCommand),
}
