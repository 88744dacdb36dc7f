//! Metric registry and collector.
//!
//! Bridges the upstream node statistics onto the fixed catalog of series and
//! tracks scrape health. A failed scrape never escapes `collect`: it degrades
//! the pass to a single `up = 0` observation.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use centex_core::error::ScrapeError;
use centex_core::{Catalog, MetricIdentity, NodeMetrics, Observation};

/// Source of node statistics (the upstream client, or a fake in tests).
#[async_trait]
pub trait NodeSource: Send + Sync {
    async fn fetch_node_status(&self) -> Result<NodeMetrics, ScrapeError>;
}

const AVAILABILITY_UNKNOWN: u8 = 0;
const AVAILABILITY_DOWN: u8 = 1;
const AVAILABILITY_UP: u8 = 2;

pub struct Collector {
    catalog: Arc<Catalog>,
    source: Arc<dyn NodeSource>,
    // Held across fetch + mapping: at most one upstream call in flight.
    scrape_lock: Mutex<()>,
    availability: AtomicU8,
}

impl Collector {
    pub fn new(catalog: Arc<Catalog>, source: Arc<dyn NodeSource>) -> Self {
        Self {
            catalog,
            source,
            scrape_lock: Mutex::new(()),
            availability: AtomicU8::new(AVAILABILITY_UNKNOWN),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Every identity `collect` can ever emit, including `up`.
    pub fn describe(&self) -> Vec<Arc<MetricIdentity>> {
        self.catalog.identities()
    }

    /// Outcome of the last completed pass; `None` before the first one.
    pub fn up(&self) -> Option<bool> {
        match self.availability.load(Ordering::Acquire) {
            AVAILABILITY_UP => Some(true),
            AVAILABILITY_DOWN => Some(false),
            _ => None,
        }
    }

    /// Scrape the upstream once and map the result onto the catalog.
    ///
    /// Concurrent callers queue on the scrape lock and each run their own
    /// fetch. `up` is always the first observation.
    pub async fn collect(&self) -> Vec<Observation> {
        let _guard = self.scrape_lock.lock().await;
        let started = Instant::now();

        let metrics = match self.source.fetch_node_status().await {
            Ok(m) => m,
            Err(e) => {
                self.availability.store(AVAILABILITY_DOWN, Ordering::Release);
                warn!(error = %e, kind = e.kind().as_str(), "can't scrape centrifugo");
                return vec![Observation::new(Arc::clone(self.catalog.up()), 0.0)];
            }
        };

        self.availability.store(AVAILABILITY_UP, Ordering::Release);

        let mut out = Vec::with_capacity(self.catalog.entries().len() + 1);
        out.push(Observation::new(Arc::clone(self.catalog.up()), 1.0));
        for identity in self.catalog.entries() {
            if let Some(value) = metrics.get(&identity.key) {
                out.push(Observation::new(Arc::clone(identity), *value));
            }
        }

        debug!(
            received = metrics.len(),
            exported = out.len() - 1,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "centrifugo scrape ok"
        );
        out
    }
}
