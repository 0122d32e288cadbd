use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, report produced (possibly empty)
/// - `Failure` (1): A catalog could not be read or has no valid header
/// - `Error` (2): Command failed before scanning (config error, bad folder, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// The report was aborted by an unreadable or malformed catalog.
    Failure,
    /// Command failed due to an internal or configuration error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
