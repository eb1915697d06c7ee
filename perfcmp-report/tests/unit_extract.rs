use perfcmp_common::{MetricsRecord, ReportError};
use perfcmp_report::extract::{extract_metrics, final_section, parse_results, read_metrics};
use std::fs;

const LINE: &str = "[12.5s] Requests: 1000 | Errors: 5 | Throughput: 80.00 req/s | Avg: 10.5ms | p50: 9.0ms | p95: 20.0ms | p99: 30.0ms";

fn expected() -> MetricsRecord {
    MetricsRecord {
        duration_secs: 12.5,
        requests: 1000,
        errors: 5,
        throughput: 80.0,
        avg_latency: "10.5ms".to_string(),
        p50: "9.0ms".to_string(),
        p95: "20.0ms".to_string(),
        p99: "30.0ms".to_string(),
    }
}

#[test]
fn test_final_section_uses_last_marker() {
    let content = "a\n=== Final Results ===\nb\n=== Final Results ===\nc";
    assert_eq!(final_section(content), "\nc");
}

#[test]
fn test_final_section_without_marker_is_whole_text() {
    assert_eq!(final_section("no marker here"), "no marker here");
    assert_eq!(final_section(""), "");
}

#[test]
fn test_extract_after_marker() {
    let content = format!("Starting workload generator\n\n=== Final Results ===\n{LINE}\n");
    assert_eq!(extract_metrics(&content).unwrap(), Some(expected()));
}

#[test]
fn test_extract_ignores_periodic_stats_before_last_marker() {
    // Periodic lines before the marker would match too; only the tail counts.
    let early = "[5.0s] Requests: 10 | Errors: 0 | Throughput: 2.0 req/s | Avg: 1ms | p50: 1ms | p95: 1ms | p99: 1ms";
    let content = format!("{early}\n=== Final Results ===\n{early}\n=== Final Results ===\n{LINE}\n");
    assert_eq!(extract_metrics(&content).unwrap(), Some(expected()));
}

#[test]
fn test_extract_whole_text_without_marker() {
    let content = format!("noise\n{LINE}\nmore noise\n");
    assert_eq!(extract_metrics(&content).unwrap(), Some(expected()));
}

#[test]
fn test_extract_uses_first_match_in_section() {
    let later = "[20.0s] Requests: 2 | Errors: 0 | Throughput: 0.1 req/s | Avg: 1ms | p50: 1ms | p95: 1ms | p99: 1ms";
    let content = format!("=== Final Results ===\n{LINE}\n{later}\n");
    assert_eq!(extract_metrics(&content).unwrap(), Some(expected()));
}

#[test]
fn test_extract_no_match_after_last_marker() {
    // A valid line exists, but only before the last marker.
    let content = format!("{LINE}\n=== Final Results ===\nworkload crashed\n");
    assert_eq!(extract_metrics(&content).unwrap(), None);
}

#[test]
fn test_extract_keeps_latency_units_verbatim() {
    let content = "[60.0s] Requests: 5 | Errors: 0 | Throughput: 0.1 req/s | Avg: 850µs | p50: 1.2ms | p95: 1.5s | p99: 2.25s";
    let m = extract_metrics(content).unwrap().expect("line should match");
    assert_eq!(m.avg_latency, "850µs");
    assert_eq!(m.p50, "1.2ms");
    assert_eq!(m.p95, "1.5s");
    assert_eq!(m.p99, "2.25s");
}

#[test]
fn test_extract_requires_fractional_duration() {
    let content = "[12s] Requests: 1000 | Errors: 5 | Throughput: 80.00 req/s | Avg: 10.5ms | p50: 9.0ms | p95: 20.0ms | p99: 30.0ms";
    assert_eq!(extract_metrics(content).unwrap(), None);
}

#[test]
fn test_extract_invalid_throughput_is_error() {
    let content = "[1.0s] Requests: 1 | Errors: 0 | Throughput: 1.2.3 req/s | Avg: 1ms | p50: 1ms | p95: 1ms | p99: 1ms";
    match extract_metrics(content) {
        Err(ReportError::InvalidNumber { field, value }) => {
            assert_eq!(field, "throughput");
            assert_eq!(value, "1.2.3");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn test_extract_overflowing_count_is_error() {
    let content = "[1.0s] Requests: 99999999999999999999999 | Errors: 0 | Throughput: 1.0 req/s | Avg: 1ms | p50: 1ms | p95: 1ms | p99: 1ms";
    assert!(matches!(
        extract_metrics(content),
        Err(ReportError::InvalidNumber { field: "requests", .. })
    ));
}

#[test]
fn test_read_metrics_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    assert!(matches!(read_metrics(&path), Err(ReportError::Read(_))));
}

#[test]
fn test_read_metrics_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmp_grpc_zipkin_micro.txt");
    fs::write(&path, format!("=== Final Results ===\n{LINE}")).unwrap();
    assert_eq!(read_metrics(&path).unwrap(), Some(expected()));
}

#[test]
fn test_parse_results_degrades_to_none() {
    let dir = tempfile::tempdir().unwrap();

    // Unreadable: a directory where a file is expected.
    assert_eq!(parse_results(dir.path()), None);

    // Not UTF-8.
    let binary = dir.path().join("binary.txt");
    fs::write(&binary, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    assert_eq!(parse_results(&binary), None);

    // No metrics line.
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "=== Final Results ===\n").unwrap();
    assert_eq!(parse_results(&empty), None);
}

#[test]
fn test_displayed_record_is_extractable() {
    let m = expected();
    let content = format!("=== Final Results ===\n{m}\n");
    let parsed = extract_metrics(&content).unwrap().expect("displayed record should match");
    assert_eq!(parsed.requests, 1000);
    assert_eq!(parsed.throughput, 80.0);
    assert_eq!(parsed.p99, "30.0ms");
}
