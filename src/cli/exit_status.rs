use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and produced a result
/// - `Failure` (1): Command completed without a result (empty translation, existing config)
/// - `Error` (2): Command failed (unreadable directory, invalid file name, malformed XML, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and produced a result.
    Success,
    /// Command completed without a result.
    Failure,
    /// Command failed due to an error.
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
