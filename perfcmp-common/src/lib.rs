use std::fmt;
use thiserror::Error;

/// Literal line the workload generator prints right before its final metrics line.
pub const FINAL_RESULTS_MARKER: &str = "=== Final Results ===";

/// Error types for reading and parsing result logs
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid {field} value: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Result type for perfcmp operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Final aggregate metrics of one benchmark run.
///
/// Latencies are kept exactly as printed (`"10.5ms"`, `"850µs"`), unit suffix included.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    pub duration_secs: f64,
    pub requests: u64,
    pub errors: u64,
    /// Requests per second.
    pub throughput: f64,
    pub avg_latency: String,
    pub p50: String,
    pub p95: String,
    pub p99: String,
}

/// Renders the record in the workload generator's stats line format.
impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.1}s] Requests: {} | Errors: {} | Throughput: {:.1} req/s | Avg: {} | p50: {} | p95: {} | p99: {}",
            self.duration_secs,
            self.requests,
            self.errors,
            self.throughput,
            self.avg_latency,
            self.p50,
            self.p95,
            self.p99,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Grpc,
    Thrift,
}

impl Transport {
    pub fn as_key(&self) -> &'static str {
        match self {
            Transport::Grpc => "grpc",
            Transport::Thrift => "thrift",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transport::Grpc => "gRPC",
            Transport::Thrift => "Thrift",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "grpc" => Some(Transport::Grpc),
            "thrift" => Some(Transport::Thrift),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tracing {
    Zipkin,
    NoTrace,
}

impl Tracing {
    pub fn as_key(&self) -> &'static str {
        match self {
            Tracing::Zipkin => "zipkin",
            Tracing::NoTrace => "nozipkin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tracing::Zipkin => "Zipkin",
            Tracing::NoTrace => "NoTrace",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "zipkin" => Some(Tracing::Zipkin),
            "nozipkin" => Some(Tracing::NoTrace),
            _ => None,
        }
    }
}

/// Service topology: every service in its own process, or all in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    Micro,
    Mono,
}

impl Deployment {
    pub fn as_key(&self) -> &'static str {
        match self {
            Deployment::Micro => "micro",
            Deployment::Mono => "mono",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Deployment::Micro => "Micro",
            Deployment::Mono => "Mono",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "micro" => Some(Deployment::Micro),
            "mono" => Some(Deployment::Mono),
            _ => None,
        }
    }
}

/// One point of the transport × tracing × deployment experiment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    pub transport: Transport,
    pub tracing: Tracing,
    pub deployment: Deployment,
}

const fn cfg(transport: Transport, tracing: Tracing, deployment: Deployment) -> Configuration {
    Configuration { transport, tracing, deployment }
}

impl Configuration {
    /// Every configuration, in report collection order.
    pub const ALL: [Configuration; 8] = [
        cfg(Transport::Grpc, Tracing::Zipkin, Deployment::Micro),
        cfg(Transport::Thrift, Tracing::Zipkin, Deployment::Micro),
        cfg(Transport::Grpc, Tracing::NoTrace, Deployment::Micro),
        cfg(Transport::Thrift, Tracing::NoTrace, Deployment::Micro),
        cfg(Transport::Grpc, Tracing::Zipkin, Deployment::Mono),
        cfg(Transport::Thrift, Tracing::Zipkin, Deployment::Mono),
        cfg(Transport::Grpc, Tracing::NoTrace, Deployment::Mono),
        cfg(Transport::Thrift, Tracing::NoTrace, Deployment::Mono),
    ];

    pub const fn new(transport: Transport, tracing: Tracing, deployment: Deployment) -> Self {
        cfg(transport, tracing, deployment)
    }

    /// File-name key, e.g. `cmp_grpc_nozipkin_micro`.
    pub fn key(&self) -> String {
        format!(
            "cmp_{}_{}_{}",
            self.transport.as_key(),
            self.tracing.as_key(),
            self.deployment.as_key()
        )
    }

    /// Parse a key produced by [`Configuration::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        let mut parts = key.strip_prefix("cmp_")?.split('_');
        let transport = Transport::from_key(parts.next()?)?;
        let tracing = Tracing::from_key(parts.next()?)?;
        let deployment = Deployment::from_key(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(cfg(transport, tracing, deployment))
    }

    /// Display label, e.g. `gRPC + NoTrace + Micro`.
    pub fn label(&self) -> String {
        format!(
            "{} + {} + {}",
            self.transport.label(),
            self.tracing.label(),
            self.deployment.label()
        )
    }

    pub fn description(&self) -> String {
        let topology = match self.deployment {
            Deployment::Micro => "Microservices",
            Deployment::Mono => "Monolith",
        };
        match self.tracing {
            Tracing::Zipkin => format!("{} with {} and Zipkin tracing", topology, self.transport.label()),
            Tracing::NoTrace => format!("{} with {}, no tracing", topology, self.transport.label()),
        }
    }

    /// Name of the result log for this configuration inside the results directory.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.key())
    }
}
