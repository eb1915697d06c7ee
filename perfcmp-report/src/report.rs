use crate::comparison::{evaluate_all, ComparisonOutcome};
use crate::config::TABLE_WIDTH;
use crate::results::{Entry, ResultSet};
use perfcmp_common::Configuration;
use std::io::{self, Write};

/// Write the full report: ranked table, analysis, and per-configuration details.
pub fn write_report<W: Write>(results: &ResultSet, out: &mut W) -> io::Result<()> {
    let ranked = results.ranked();
    write_summary_table(&ranked, out)?;
    write_analysis(&evaluate_all(results), out)?;
    write_details(&ranked, out)
}

pub fn write_summary_table<W: Write>(ranked: &[&Entry], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Performance Comparison Results (Sorted by Throughput) ===\n")?;
    writeln!(
        out,
        "{:<6} {:<30} {:<15} {:<15} {:<15} {:<10}",
        "Rank", "Configuration", "Throughput", "Avg Latency", "p99 Latency", "Errors"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for (rank, entry) in ranked.iter().enumerate() {
        let m = &entry.metrics;
        writeln!(
            out,
            "{:<6} {:<30} {:<15.2} {:<15} {:<15} {:<10}",
            rank + 1,
            entry.configuration.label(),
            m.throughput,
            m.avg_latency,
            m.p99,
            m.errors
        )?;
    }
    Ok(())
}

pub fn write_analysis<W: Write>(outcomes: &[ComparisonOutcome], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Analysis ===\n")?;
    for outcome in outcomes {
        writeln!(out, "{}", outcome.comparison.title)?;
        writeln!(out, "   Throughput difference: {:+.1}%", outcome.diff_pct)?;
        writeln!(out, "   {}\n", outcome.verdict_line())?;
    }
    Ok(())
}

pub fn write_details<W: Write>(ranked: &[&Entry], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Detailed Results ===\n")?;
    for (rank, entry) in ranked.iter().enumerate() {
        let m = &entry.metrics;
        writeln!(out, "{}. {}", rank + 1, entry.configuration.label())?;
        writeln!(out, "   Duration:    {:.1}s", m.duration_secs)?;
        writeln!(out, "   Requests:    {}", m.requests)?;
        writeln!(out, "   Errors:      {}", m.errors)?;
        writeln!(out, "   Throughput:  {:.2} req/s", m.throughput)?;
        writeln!(out, "   Avg Latency: {}", m.avg_latency)?;
        writeln!(out, "   p50 Latency: {}", m.p50)?;
        writeln!(out, "   p95 Latency: {}", m.p95)?;
        writeln!(out, "   p99 Latency: {}", m.p99)?;
        writeln!(out)?;
    }
    Ok(())
}

/// List every configuration with the file it is read from.
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    for configuration in Configuration::ALL {
        writeln!(
            out,
            "{:<30} {:<30} {}",
            configuration.label(),
            configuration.file_name(),
            configuration.description()
        )?;
    }
    Ok(())
}
