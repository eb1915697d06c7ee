use crate::extract::parse_results;
use perfcmp_common::{Configuration, MetricsRecord};
use std::path::Path;
use tracing::{debug, info};

/// Parsed metrics for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub configuration: Configuration,
    pub metrics: MetricsRecord,
}

/// Metrics collected during one run, in insertion order.
#[derive(Debug, Default)]
pub struct ResultSet {
    entries: Vec<Entry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `<key>.txt` in `dir` for every configuration in the catalog.
    ///
    /// Missing files are skipped without a warning; files that fail to parse are
    /// logged by [`parse_results`] and skipped.
    pub fn collect(dir: &Path) -> Self {
        let mut results = Self::new();
        for configuration in Configuration::ALL {
            let path = dir.join(configuration.file_name());
            if !path.exists() {
                debug!(path = %path.display(), "result file missing, skipping");
                continue;
            }
            if let Some(metrics) = parse_results(&path) {
                info!(
                    configuration = %configuration.label(),
                    throughput = metrics.throughput,
                    "parsed results"
                );
                results.insert(configuration, metrics);
            }
        }
        results
    }

    /// Store `metrics` for `configuration`, replacing any earlier entry in place.
    pub fn insert(&mut self, configuration: Configuration, metrics: MetricsRecord) {
        match self.entries.iter_mut().find(|e| e.configuration == configuration) {
            Some(entry) => entry.metrics = metrics,
            None => self.entries.push(Entry { configuration, metrics }),
        }
    }

    pub fn get(&self, configuration: &Configuration) -> Option<&MetricsRecord> {
        self.entries
            .iter()
            .find(|e| &e.configuration == configuration)
            .map(|e| &e.metrics)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by throughput, highest first. Ties keep insertion order.
    pub fn ranked(&self) -> Vec<&Entry> {
        let mut ranked: Vec<&Entry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.metrics.throughput.total_cmp(&a.metrics.throughput));
        ranked
    }
}
