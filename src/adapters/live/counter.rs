//! Live line counter shelling out to an external counting utility.

use std::path::Path;
use std::process::Command;

use crate::ports::counter::LineCounter;

/// Default counting utility, invoked as `cloc <file>`.
const DEFAULT_PROGRAM: &str = "cloc";

/// Env var overriding the counting utility binary.
pub const COUNTER_ENV: &str = "SCOPEMARK_COUNTER";

/// Live counter that spawns the counting utility and parses its report.
///
/// The report layout is pinned to the utility's fixed single-file format:
/// the total sits in the last column of the third-from-last report line.
/// Any other shape is an error, not a guess.
pub struct ClocLineCounter {
    program: String,
}

impl ClocLineCounter {
    /// Creates a counter using `SCOPEMARK_COUNTER`, falling back to `cloc`.
    #[must_use]
    pub fn new() -> Self {
        let program =
            std::env::var(COUNTER_ENV).unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());
        Self { program }
    }

    /// Creates a counter invoking the given program.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for ClocLineCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCounter for ClocLineCounter {
    fn count_lines(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new(&self.program).arg(path).output().map_err(|e| {
            format!("failed to spawn line counter '{}': {e}", self.program)
        })?;
        if !output.status.success() {
            return Err(format!(
                "line counter '{}' exited with {} for {}",
                self.program,
                output.status,
                path.display()
            )
            .into());
        }
        parse_report(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extracts the total line count from a counting utility report.
///
/// The counter only ever runs on single files, so the total always sits
/// in the third-from-last line of the report; its last whitespace-delimited
/// token is the count.
///
/// # Errors
///
/// Returns an error if the report is too short or the total token is not
/// a non-negative integer.
pub fn parse_report(report: &str) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
    let lines: Vec<&str> = report.split('\n').collect();
    if lines.len() < 3 {
        return Err(format!("unrecognized line counter report: {report:?}").into());
    }
    let total_line = lines[lines.len() - 3];
    let token = total_line
        .split_whitespace()
        .last()
        .ok_or_else(|| format!("line counter report has an empty total line: {report:?}"))?;
    token
        .parse::<u64>()
        .map_err(|e| format!("line counter total '{token}' is not a count: {e}").into())
}
