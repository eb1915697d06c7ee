use crate::config::PARSE_ERROR_TARGET;
use perfcmp_common::{MetricsRecord, ReportError, Result, FINAL_RESULTS_MARKER};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{trace, warn};

const METRICS_PATTERN: &str = concat!(
    r"\[(\d+\.\d+)s\] Requests: (\d+) \| Errors: (\d+) \| Throughput: ([\d.]+) req/s \| ",
    r"Avg: ([\d.]+\w+) \| p50: ([\d.]+\w+) \| p95: ([\d.]+\w+) \| p99: ([\d.]+\w+)",
);

fn metrics_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(METRICS_PATTERN).expect("metrics pattern is valid"))
}

/// Text after the last Final Results marker, or all of `content` when the marker never appears.
pub fn final_section(content: &str) -> &str {
    match content.rsplit_once(FINAL_RESULTS_MARKER) {
        Some((_, tail)) => tail,
        None => content,
    }
}

/// Extract the first metrics line found in the final section of `content`.
///
/// Returns `Ok(None)` when nothing matches. A line that matches but carries an
/// unparseable number (e.g. `Throughput: 1.2.3 req/s`) is an error.
pub fn extract_metrics(content: &str) -> Result<Option<MetricsRecord>> {
    let section = final_section(content);
    let Some(caps) = metrics_regex().captures(section) else {
        return Ok(None);
    };

    Ok(Some(MetricsRecord {
        duration_secs: number(&caps, 1, "duration")?,
        requests: number(&caps, 2, "requests")?,
        errors: number(&caps, 3, "errors")?,
        throughput: number(&caps, 4, "throughput")?,
        avg_latency: caps[5].to_string(),
        p50: caps[6].to_string(),
        p95: caps[7].to_string(),
        p99: caps[8].to_string(),
    }))
}

fn number<T: FromStr>(caps: &Captures<'_>, group: usize, field: &'static str) -> Result<T> {
    let raw = &caps[group];
    raw.parse().map_err(|_| ReportError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Read `path` as UTF-8 text and extract its final metrics.
pub fn read_metrics(path: &Path) -> Result<Option<MetricsRecord>> {
    let content = fs::read_to_string(path)?;
    extract_metrics(&content)
}

/// Best-effort variant of [`read_metrics`]: failures are logged and reported as no data.
pub fn parse_results(path: &Path) -> Option<MetricsRecord> {
    match read_metrics(path) {
        Ok(Some(metrics)) => Some(metrics),
        Ok(None) => {
            trace!(path = %path.display(), "no metrics line found");
            None
        }
        Err(e) => {
            warn!(target: PARSE_ERROR_TARGET, "Error parsing {}: {}", path.display(), e);
            None
        }
    }
}
