use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

pub mod comparison;
pub mod config;
pub mod extract;
pub mod logging;
pub mod report;
pub mod results;

use config::{MISSING_DIR_HINT, NO_RESULTS_MESSAGE};
use results::ResultSet;

/// How a run ended. Every variant is a successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    MissingDirectory,
    NoResults,
    Reported { configurations: usize },
}

/// Collect results from `results_dir` and write the comparison report to `out`.
///
/// Only write failures on `out` are errors; unreadable or malformed result files
/// are logged and left out of the report.
pub fn run<W: Write>(results_dir: &Path, out: &mut W) -> io::Result<RunStatus> {
    if !results_dir.exists() {
        writeln!(out, "{MISSING_DIR_HINT}")?;
        return Ok(RunStatus::MissingDirectory);
    }

    let results = ResultSet::collect(results_dir);
    if results.is_empty() {
        writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        return Ok(RunStatus::NoResults);
    }

    debug!(configurations = results.len(), "writing report");
    report::write_report(&results, out)?;
    Ok(RunStatus::Reported { configurations: results.len() })
}
