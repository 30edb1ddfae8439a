use std::process::ExitCode;

use crate::driver::BatchSummary;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; in dry-run mode, nothing would change
/// - `Failure` (1): Dry run found files that would be rewritten, or `init` refused to overwrite
/// - `Error` (2): Command aborted (I/O, encoding, config or rules error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a finished batch: pending work in a dry run is a failure.
    pub fn from_batch(summary: &BatchSummary, dry_run: bool) -> Self {
        if dry_run && summary.updated > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
