//! Main entry point for the poreport CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and exit status
//! - `Err` if the command fails before producing a result (e.g., config error,
//!   unreadable folder)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, report::report},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Report(cmd)) => report(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
