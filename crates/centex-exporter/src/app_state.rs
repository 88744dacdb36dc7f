//! Shared application state for the exporter.
//!
//! Startup errors are explicit (`ConfigError`), never panics.

use std::sync::Arc;

use tracing::{debug, info};

use centex_core::error::Result;
use centex_core::Catalog;

use crate::collector::{Collector, NodeSource};
use crate::config::ExporterConfig;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    collector: Arc<Collector>,
}

struct AppStateInner {
    cfg: ExporterConfig,
}

impl AppState {
    /// Build state backed by the configured Centrifugo server.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let client = UpstreamClient::configure(
            &cfg.centrifugo.server,
            &cfg.centrifugo.secret,
            cfg.centrifugo.timeout()?,
        )?;
        info!(
            endpoint = %client.endpoint(),
            timeout_ms = client.timeout().as_millis() as u64,
            "centrifugo upstream configured"
        );

        Ok(Self::with_source(cfg, Arc::new(client)))
    }

    /// Build state around any node source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn NodeSource>) -> Self {
        let collector = Collector::new(Arc::new(Catalog::centrifugo()), source);

        // Identities are fixed before the first scrape.
        let identities = collector.describe();
        for id in &identities {
            debug!(name = %id.name, kind = id.kind.as_str(), key = %id.key, "metric registered");
        }
        info!(metrics = identities.len(), "metric identities registered");

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            collector: Arc::new(collector),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn collector(&self) -> Arc<Collector> {
        Arc::clone(&self.collector)
    }
}
