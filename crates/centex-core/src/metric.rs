//! Metric identities and per-scrape observations.

use std::collections::HashMap;
use std::sync::Arc;

/// Upstream field name -> raw value, produced fresh on every scrape.
pub type NodeMetrics = HashMap<String, f64>;

/// Series kind. Decides the `# TYPE` line on exposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Monotonically non-decreasing cumulative value.
    Counter,
    /// Point-in-time value.
    Gauge,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// Stable description of one exported series.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricIdentity {
    /// Field name in the upstream `metrics` object.
    pub key: String,
    /// Fully-qualified exported name (`<namespace>_<metric>`).
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
}

impl MetricIdentity {
    pub fn new(namespace: &str, key: &str, metric: &str, help: &str, kind: MetricKind) -> Self {
        Self {
            key: key.to_string(),
            name: format!("{namespace}_{metric}"),
            help: help.to_string(),
            kind,
        }
    }
}

/// One value emitted by a collection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub identity: Arc<MetricIdentity>,
    pub value: f64,
}

impl Observation {
    pub fn new(identity: Arc<MetricIdentity>, value: f64) -> Self {
        Self { identity, value }
    }
}
