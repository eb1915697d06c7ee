/// Directory searched for result logs when `--results-dir` is not given.
pub const DEFAULT_RESULTS_DIR: &str = "performance_results";

/// Printed when the results directory does not exist.
pub const MISSING_DIR_HINT: &str = "No results directory found. Run ./run_comparison.sh first.";

/// Printed when no configuration produced usable metrics.
pub const NO_RESULTS_MESSAGE: &str = "No valid results found.";

/// Width of the separator under the ranked table header.
pub const TABLE_WIDTH: usize = 96;

/// Log target of the per-file `Error parsing` line. Always enabled at warn.
pub const PARSE_ERROR_TARGET: &str = "perfcmp::parse_errors";
