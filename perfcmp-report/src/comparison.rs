use crate::results::ResultSet;
use perfcmp_common::{Configuration, Deployment, Tracing, Transport};
use tracing::warn;

/// How a comparison turns its percentage difference into a conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `if_higher` wins when the candidate's throughput is strictly higher, otherwise `if_not`.
    Winner {
        if_higher: &'static str,
        if_not: &'static str,
    },
    /// Magnitude of the difference, attributed to the feature the baseline enables.
    Overhead,
}

/// A pairwise throughput comparison between two configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub title: &'static str,
    pub baseline: Configuration,
    pub candidate: Configuration,
    pub verdict: Verdict,
}

const GRPC_ZIPKIN_MICRO: Configuration =
    Configuration::new(Transport::Grpc, Tracing::Zipkin, Deployment::Micro);

/// Comparisons printed in the analysis section, in order.
pub const COMPARISONS: [Comparison; 3] = [
    Comparison {
        title: "1. gRPC vs Thrift (microservices):",
        baseline: GRPC_ZIPKIN_MICRO,
        candidate: Configuration::new(Transport::Thrift, Tracing::Zipkin, Deployment::Micro),
        verdict: Verdict::Winner { if_higher: "Thrift", if_not: "gRPC" },
    },
    Comparison {
        title: "2. Zipkin overhead (gRPC microservices):",
        baseline: GRPC_ZIPKIN_MICRO,
        candidate: Configuration::new(Transport::Grpc, Tracing::NoTrace, Deployment::Micro),
        verdict: Verdict::Overhead,
    },
    Comparison {
        title: "3. Microservices vs Monolith (gRPC with zipkin):",
        baseline: GRPC_ZIPKIN_MICRO,
        candidate: Configuration::new(Transport::Grpc, Tracing::Zipkin, Deployment::Mono),
        verdict: Verdict::Winner { if_higher: "Monolith", if_not: "Microservices" },
    },
];

/// Computed result of a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonOutcome {
    pub comparison: Comparison,
    /// Signed throughput change from baseline to candidate, in percent.
    pub diff_pct: f64,
}

impl ComparisonOutcome {
    /// Unsigned magnitude of [`ComparisonOutcome::diff_pct`].
    pub fn overhead_pct(&self) -> f64 {
        self.diff_pct.abs()
    }

    /// The verdict line, e.g. `Winner: Thrift` or `Overhead: 12.5%`.
    pub fn verdict_line(&self) -> String {
        match self.comparison.verdict {
            Verdict::Winner { if_higher, if_not } => {
                let winner = if self.diff_pct > 0.0 { if_higher } else { if_not };
                format!("Winner: {winner}")
            }
            Verdict::Overhead => format!("Overhead: {:.1}%", self.overhead_pct()),
        }
    }
}

/// `(candidate - baseline) / baseline * 100`, or `None` when the baseline is zero.
pub fn percent_difference(baseline: f64, candidate: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    Some((candidate - baseline) / baseline * 100.0)
}

impl Comparison {
    /// Evaluate against `results`. `None` unless both configurations are present.
    pub fn evaluate(&self, results: &ResultSet) -> Option<ComparisonOutcome> {
        let baseline = results.get(&self.baseline)?;
        let candidate = results.get(&self.candidate)?;
        match percent_difference(baseline.throughput, candidate.throughput) {
            Some(diff_pct) => Some(ComparisonOutcome { comparison: *self, diff_pct }),
            None => {
                warn!(
                    baseline = %self.baseline.label(),
                    "baseline throughput is zero, skipping comparison"
                );
                None
            }
        }
    }
}

/// Outcomes of every comparison whose configurations are both present.
pub fn evaluate_all(results: &ResultSet) -> Vec<ComparisonOutcome> {
    COMPARISONS.iter().filter_map(|c| c.evaluate(results)).collect()
}
