//! The fixed set of Centrifugo series exported by centex.
//!
//! Built once at startup and shared behind `Arc`. Entries are never added or
//! removed afterwards, so the reporting side can enumerate every name before
//! the first scrape.

use std::sync::Arc;

use crate::metric::MetricKind::{Counter, Gauge};
use crate::metric::{MetricIdentity, MetricKind};

/// Namespace prefix of every exported name.
pub const NAMESPACE: &str = "centrifugo";

/// Key of the synthetic availability series.
pub const UP_KEY: &str = "up";

// (upstream key, exported metric, help, kind)
const CENTRIFUGO_NODE_METRICS: [(&str, &str, &str, MetricKind); 12] = [
    (
        "client_bytes_in",
        "client_bytes_in_total",
        "number of bytes coming to client API (bytes sent from clients)",
        Counter,
    ),
    (
        "client_bytes_out",
        "client_bytes_out_total",
        "number of bytes coming out of client API (bytes sent to clients)",
        Counter,
    ),
    ("client_num_connect", "client_num_connect", "number of connections of client API", Counter),
    (
        "client_num_msg_published",
        "client_num_msg_published",
        "number of messages published via client API",
        Counter,
    ),
    (
        "client_num_msg_queued",
        "client_num_msg_queued",
        "number of messages put into client queues",
        Counter,
    ),
    (
        "client_num_msg_sent",
        "client_num_msg_sent",
        "number of messages actually sent to client",
        Counter,
    ),
    ("client_num_subscribe", "client_num_subscribe", "subscribes via client API", Counter),
    ("node_num_clients", "node_num_clients", "number of connected authorized clients", Gauge),
    (
        "node_num_unique_clients",
        "node_num_unique_clients",
        "number of unique clients connected",
        Gauge,
    ),
    ("node_num_channels", "node_num_channels", "number of active channels", Gauge),
    (
        "node_num_client_msg_published",
        "node_num_client_msg_published",
        "number of messages published",
        Counter,
    ),
    (
        "http_api_num_requests",
        "http_api_num_requests",
        "number of requests to server HTTP API",
        Counter,
    ),
];

/// Immutable registry of metric identities plus the `up` gauge.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Arc<MetricIdentity>>,
    up: Arc<MetricIdentity>,
}

impl Catalog {
    /// Catalog of Centrifugo node statistics under the `centrifugo` namespace.
    pub fn centrifugo() -> Self {
        let entries = CENTRIFUGO_NODE_METRICS
            .iter()
            .map(|(key, metric, help, kind)| {
                Arc::new(MetricIdentity::new(NAMESPACE, key, metric, help, *kind))
            })
            .collect();
        Self::new(NAMESPACE, entries)
    }

    pub fn new(namespace: &str, entries: Vec<Arc<MetricIdentity>>) -> Self {
        let up = Arc::new(MetricIdentity::new(
            namespace,
            UP_KEY,
            UP_KEY,
            "Was the last scrape of centrifugo successful.",
            MetricKind::Gauge,
        ));
        Self { entries, up }
    }

    /// Series mapped from upstream fields, in definition order.
    pub fn entries(&self) -> &[Arc<MetricIdentity>] {
        &self.entries
    }

    pub fn up(&self) -> &Arc<MetricIdentity> {
        &self.up
    }

    /// Every identity this catalog can ever emit (`up` last).
    pub fn identities(&self) -> Vec<Arc<MetricIdentity>> {
        let mut all = self.entries.clone();
        all.push(Arc::clone(&self.up));
        all
    }
}
